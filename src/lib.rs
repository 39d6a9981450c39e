#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! tweak-catalog library
//!
//! A read-only, bilingual catalog of Windows performance and security
//! tweaks, grouped into nine fixed categories. It can be used
//! programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Listing a category and looking up one tweak:
//!
//! ```
//! use tweak_catalog::catalog::{Catalog, Category};
//!
//! let catalog = Catalog::builtin()?;
//! assert_eq!(catalog.list_categories().len(), 9);
//!
//! let tweaks = catalog.get_tweaks(Category::FirewallSecurity, "es")?;
//! let first = &tweaks[0];
//! let same = catalog.get_tweak_by_id(Category::FirewallSecurity, "es", &first.id)?;
//! assert_eq!(first, same);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Locale Fallback
//!
//! Requests for a locale without data are answered from the default locale:
//!
//! ```
//! use tweak_catalog::catalog::{Catalog, Category, Locale};
//!
//! let catalog = Catalog::builtin()?;
//! let resolved = catalog.resolve_locale(Category::Memory, "de")?;
//! assert_eq!(resolved, &Locale::EN);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Sitemap
//!
//! ```
//! use tweak_catalog::sitemap::{CivilDate, Sitemap};
//!
//! let xml = Sitemap::default().render(CivilDate::new(2025, 5, 1));
//! assert!(xml.contains("<loc>https://www.codextreme.me/es/guias</loc>"));
//! ```

/// Catalog data model, embedded data and lookups
pub mod catalog;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Locale-aware URL helpers
pub mod routing;
/// Sitemap XML generation
pub mod sitemap;
/// Catalog validation rules
pub mod validate;
