//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::TweakCatalogError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .tweak-catalog.toml in the given directory
    ///
    /// A missing file yields the defaults.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tweak_catalog::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Default locale: {}", config.default_locale);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        // Read file atomically - no TOCTOU race window
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_root.display());
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .tweak-catalog.toml");
            }
        };

        Self::parse(&contents, &config_path)
    }

    /// Load an explicitly named config file, which must exist
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        Self::load_file_with_fs(path, &RealFileSystem)
    }

    /// Load an explicitly named config file with a custom filesystem implementation
    pub fn load_file_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<ConfigFile> {
        let contents = fs
            .read_to_string(path)
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => TweakCatalogError::ConfigNotFound {
                    path: path.to_path_buf(),
                    source,
                },
                _ => TweakCatalogError::Io {
                    context: format!("reading {}", path.display()),
                    source,
                },
            })?;

        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<ConfigFile> {
        let config: ConfigFile = toml_edit::de::from_str(contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config
            .validate()
            .map_err(|e| TweakCatalogError::InvalidConfig {
                path: path.to_path_buf(),
                message: format!("{:#}", e),
            })?;

        debug!(
            "Loaded {} (default-locale = {})",
            path.display(),
            config.default_locale
        );
        Ok(config)
    }

    /// Save config to .tweak-catalog.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tweak_catalog::config::{ConfigFile, ConfigLoader};
    /// use std::path::Path;
    ///
    /// let mut config = ConfigFile::default();
    /// config.default_locale = "es".to_string();
    /// ConfigLoader::save(&config, Path::new("."))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .context("Failed to write .tweak-catalog.toml")?;

        Ok(())
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        Self::exists_with_fs(project_root, &RealFileSystem)
    }

    /// Check for the config file with a custom filesystem implementation
    pub fn exists_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> bool {
        fs.exists(&project_root.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Locale;
    use std::io;
    use std::sync::{Arc, Mutex};

    // Mock FileSystem for testing
    #[derive(Default)]
    struct MockFileSystem {
        file_content: Option<String>,
        should_fail_read: bool,
        should_fail_write: bool,
        written_content: Arc<Mutex<Option<String>>>,
    }

    impl MockFileSystem {
        fn with_content(content: &str) -> Self {
            Self {
                file_content: Some(content.to_string()),
                ..Default::default()
            }
        }

        fn with_read_error() -> Self {
            Self {
                should_fail_read: true,
                ..Default::default()
            }
        }

        fn with_write_error() -> Self {
            Self {
                should_fail_write: true,
                ..Default::default()
            }
        }

        fn get_written_content(&self) -> Option<String> {
            self.written_content.lock().unwrap().clone()
        }
    }

    impl FileSystem for MockFileSystem {
        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            unimplemented!()
        }

        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            if self.should_fail_read {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            self.file_content
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
        }

        fn write(&self, _path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
            if self.should_fail_write {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            let contents_str = String::from_utf8_lossy(contents.as_ref()).to_string();
            *self.written_content.lock().unwrap() = Some(contents_str);
            Ok(())
        }

        fn exists(&self, _path: &Path) -> bool {
            self.file_content.is_some()
        }
    }

    #[test]
    fn test_loader_loads_from_valid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        let toml_content = r#"
default-locale = "es"
catalog-dir = "data"

[sitemap]
base-url = "https://example.com"
changefreq = "daily"
pages = ["", "/guias"]
"#;
        std::fs::write(&config_path, toml_content).unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.locale().unwrap(), Locale::ES);
        assert_eq!(config.catalog_dir.as_deref(), Some(Path::new("data")));
        assert_eq!(config.sitemap.changefreq, "daily");
        assert_eq!(config.sitemap.pages, vec!["", "/guias"]);
    }

    #[test]
    fn test_loader_with_missing_file_uses_defaults() {
        let fs = MockFileSystem::default();
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_loader_with_invalid_toml_returns_error() {
        let fs = MockFileSystem::with_content("invalid { toml syntax");
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);
        assert!(result.is_err(), "Expected error for invalid TOML");
    }

    #[test]
    fn test_loader_rejects_unknown_changefreq() {
        let fs = MockFileSystem::with_content("[sitemap]\nchangefreq = \"sometimes\"\n");
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();

        let tc_error = err.downcast_ref::<TweakCatalogError>().unwrap();
        assert!(matches!(tc_error, TweakCatalogError::InvalidConfig { .. }));
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn test_loader_with_permission_error_returns_error() {
        let fs = MockFileSystem::with_read_error();
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);

        // PermissionDenied is propagated, not treated as "missing"
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read"));
    }

    #[test]
    fn test_load_file_missing_is_config_not_found() {
        let fs = MockFileSystem::default();
        let err = ConfigLoader::load_file_with_fs(Path::new("/etc/tc.toml"), &fs).unwrap_err();

        let tc_error = err.downcast_ref::<TweakCatalogError>().unwrap();
        assert!(matches!(tc_error, TweakCatalogError::ConfigNotFound { .. }));
        assert_eq!(tc_error.exit_code(), 66);
    }

    #[test]
    fn test_load_file_permission_error_is_io() {
        let fs = MockFileSystem::with_read_error();
        let err = ConfigLoader::load_file_with_fs(Path::new("/etc/tc.toml"), &fs).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TweakCatalogError>(),
            Some(TweakCatalogError::Io { .. })
        ));
    }

    #[test]
    fn test_save_writes_valid_toml() {
        let config = ConfigFile {
            default_locale: "es".to_string(),
            ..Default::default()
        };

        let fs = MockFileSystem::default();
        ConfigLoader::save_with_fs(&config, Path::new("/test"), &fs).unwrap();

        let content = fs.get_written_content().unwrap();
        assert!(content.contains("default-locale = \"es\""));
        assert!(content.contains("[sitemap]"));
    }

    #[test]
    fn test_save_with_write_error_returns_error() {
        let fs = MockFileSystem::with_write_error();
        let result = ConfigLoader::save_with_fs(&ConfigFile::default(), Path::new("/test"), &fs);

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to write"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = tempfile::tempdir().unwrap();

        let mut config = ConfigFile::default();
        config.sitemap.base_url = "https://example.org".to_string();
        config.sitemap.pages = vec!["".to_string(), "/es".to_string()];

        ConfigLoader::save(&config, temp.path()).unwrap();
        let loaded = ConfigLoader::load(temp.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_exists_tracks_file_presence() {
        let temp = tempfile::tempdir().unwrap();
        assert!(!ConfigLoader::exists(temp.path()));

        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert!(ConfigLoader::exists(temp.path()));
    }

    #[test]
    fn test_loader_handles_empty_file() {
        let fs = MockFileSystem::with_content("");
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }
}
