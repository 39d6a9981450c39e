//! Configuration for tweak-catalog
//!
//! This module provides:
//! - .tweak-catalog.toml config file support
//! - Loading with defaults for missing files and validation of every key

pub mod file;
pub mod loader;

pub use file::{ConfigFile, SitemapSettings, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".tweak-catalog.toml");
    }
}
