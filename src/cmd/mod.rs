//! Command handlers for tweak-catalog CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod categories;
pub mod completions;
pub mod context;
pub mod init;
pub mod list;
pub mod show;
pub mod sitemap;
pub mod validate;

// Re-export command functions for convenient access
pub use categories::cmd_categories;
pub use completions::cmd_completions;
pub use context::CommandContext;
pub use init::cmd_init;
pub use list::cmd_list;
pub use show::cmd_show;
pub use sitemap::cmd_sitemap;
pub use validate::cmd_validate;
