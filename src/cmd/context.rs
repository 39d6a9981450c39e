//! Shared setup for catalog commands
//!
//! Resolves the configuration file and the catalog every command reads from.

use anyhow::{Context, Result};
use log::info;
use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, Locale};
use crate::config::{ConfigFile, ConfigLoader};
use crate::error::TweakCatalogError;

/// Configuration plus the catalog it selects
pub struct CommandContext {
    /// Loaded (or default) configuration
    pub config: ConfigFile,
    /// Directory the config was looked up in
    pub project_root: PathBuf,
    catalog: Cow<'static, Catalog>,
}

impl CommandContext {
    /// Load config from `config_path`, or from the working directory when `None`
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let project_root = env::current_dir().context("Failed to get current directory")?;
        let config = match config_path {
            Some(path) => ConfigLoader::load_file(path)?,
            None => ConfigLoader::load(&project_root)?,
        };
        Self::from_config(config, project_root)
    }

    /// Build the context for an already loaded config
    ///
    /// Relative `catalog-dir` values are resolved against `project_root`.
    pub fn from_config(config: ConfigFile, project_root: PathBuf) -> Result<Self> {
        let default_locale = config.locale()?;

        let catalog = match &config.catalog_dir {
            Some(dir) => {
                let dir = project_root.join(dir);
                info!("Loading catalog from {}", dir.display());
                let catalog = Catalog::load_dir(&dir).map_err(TweakCatalogError::from)?;
                Cow::Owned(catalog.with_default_locale(default_locale))
            }
            None => {
                let builtin = Catalog::builtin().map_err(TweakCatalogError::from)?;
                if builtin.default_locale() == &default_locale {
                    Cow::Borrowed(builtin)
                } else {
                    Cow::Owned(builtin.clone().with_default_locale(default_locale))
                }
            }
        };

        Ok(Self {
            config,
            project_root,
            catalog,
        })
    }

    /// Catalog selected by the config
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Locale to query: the `--locale` argument or the configured default
    pub fn locale<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.config.default_locale)
    }

    /// Configured fallback locale
    pub fn default_locale(&self) -> &Locale {
        self.catalog.default_locale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_borrows_builtin_catalog() {
        let ctx = CommandContext::from_config(ConfigFile::default(), PathBuf::from(".")).unwrap();
        assert!(matches!(ctx.catalog, Cow::Borrowed(_)));
        assert_eq!(ctx.default_locale(), &Locale::EN);
        assert_eq!(ctx.locale(None), "en");
        assert_eq!(ctx.locale(Some("es")), "es");
    }

    #[test]
    fn test_configured_default_locale_applies_to_catalog() {
        let config = ConfigFile {
            default_locale: "es".to_string(),
            ..Default::default()
        };
        let ctx = CommandContext::from_config(config, PathBuf::from(".")).unwrap();
        assert_eq!(ctx.default_locale(), &Locale::ES);
        assert_eq!(ctx.locale(None), "es");
    }

    #[test]
    fn test_missing_catalog_dir_is_load_error() {
        let temp = tempfile::tempdir().unwrap();
        let config = ConfigFile {
            catalog_dir: Some(PathBuf::from("nowhere")),
            ..Default::default()
        };
        let err = CommandContext::from_config(config, temp.path().to_path_buf())
            .err()
            .unwrap();
        let tc_error = err.downcast_ref::<TweakCatalogError>().unwrap();
        assert!(matches!(tc_error, TweakCatalogError::Load(_)));
        assert_eq!(tc_error.exit_code(), 65);
    }
}
