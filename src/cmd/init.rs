//! Init command implementation
//!
//! Handles the `tweak-catalog init` command which writes a default
//! `.tweak-catalog.toml` into the working directory.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile};
use crate::fmt::{icon, CHECKMARK, INFO, ROCKET, WARNING};

/// Create a default configuration file
///
/// An existing file is left untouched.
///
/// # Examples
///
/// ```no_run
/// use tweak_catalog::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    let project_root = env::current_dir()?;
    init_in(&project_root)
}

/// Create a default configuration file in `project_root`
pub fn init_in(project_root: &Path) -> Result<()> {
    println!(
        "{} {} Initializing tweak-catalog",
        icon(ROCKET),
        style("tweak-catalog init").bold()
    );
    println!();

    if config::ConfigLoader::exists(project_root) {
        println!(
            "{} Config file already exists: {}",
            icon(WARNING),
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    let config = ConfigFile::default();
    config::ConfigLoader::save(&config, project_root)?;

    println!(
        "{} Created {}",
        icon(CHECKMARK),
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    println!();
    println!("{}  Settings:", icon(INFO));
    println!(
        "   {} default-locale = {}",
        style("•").dim(),
        style(&config.default_locale).green()
    );
    println!(
        "   {} sitemap.base-url = {}",
        style("•").dim(),
        style(&config.sitemap.base_url).green()
    );
    println!(
        "   {} sitemap.pages = {} paths",
        style("•").dim(),
        style(config.sitemap.pages.len()).green()
    );
    println!();
    println!("{}  Next Steps:", icon(INFO));
    println!(
        "   1. Set {} to serve a custom catalog directory",
        style("catalog-dir").cyan()
    );
    println!(
        "   2. Run {} to check the catalog",
        style("tweak-catalog validate").cyan()
    );

    Ok(())
}
