//! Tweak catalog: data model, embedded data and lookups
//!
//! This module provides:
//! - Typed catalog schema ([`Category`], [`Locale`], [`Tweak`], [`Subsection`])
//! - The read-only [`Catalog`] store with locale fallback
//! - [`CatalogLoader`] for embedded data and external catalog directories

mod data;
pub mod error;
pub mod loader;
pub mod model;
pub mod store;

pub use error::{CatalogLoadError, InvalidLocaleCode, NotFoundError, SubsectionError};
pub use loader::CatalogLoader;
pub use model::{Category, CategoryMeta, ColorScheme, ImpactLevel, Locale, NoteKind, Subsection, Tweak};
pub use store::{Catalog, CategoryCatalog};
