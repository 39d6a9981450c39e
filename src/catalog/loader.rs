//! Catalog parsing from embedded data or a directory of JSON files
//!
//! Every category file is a JSON object keyed by locale code, each value an
//! ordered array of tweaks:
//!
//! ```json
//! { "en": [ { "id": "block-smb-port", ... } ], "es": [ ... ] }
//! ```

use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

use super::data::EMBEDDED;
use super::error::CatalogLoadError;
use super::model::{Category, Locale, Tweak};
use super::store::{Catalog, CategoryCatalog};
use crate::infra::{FileSystem, RealFileSystem};

/// Builds [`Catalog`] values from JSON sources
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse one category file
    ///
    /// Locale keys are validated; tweak order within each locale is kept.
    /// Keys that name the same locale (`"EN"` and `"en"`) are rejected.
    pub fn parse_category(category: Category, json: &str) -> Result<CategoryCatalog, CatalogLoadError> {
        let raw: BTreeMap<String, Vec<Tweak>> =
            serde_json::from_str(json).map_err(|e| CatalogLoadError::Parse {
                category,
                message: e.to_string(),
            })?;

        let mut locales = BTreeMap::new();
        for (key, tweaks) in raw {
            let locale = Locale::parse(&key)
                .map_err(|_| CatalogLoadError::InvalidLocale {
                    category,
                    key: key.clone(),
                })?;
            if locales.insert(locale, tweaks).is_some() {
                return Err(CatalogLoadError::DuplicateLocale { category, key });
            }
        }

        Ok(CategoryCatalog::new(locales))
    }

    /// Parse the catalog compiled into the binary
    pub fn load_embedded() -> Result<Catalog, CatalogLoadError> {
        let mut categories = BTreeMap::new();
        for (category, json) in EMBEDDED {
            categories.insert(category, Self::parse_category(category, json)?);
        }
        debug!("Parsed embedded catalog ({} categories)", categories.len());
        Ok(Catalog::from_categories(categories))
    }

    /// Load `<dir>/<category>.json` for every category
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tweak_catalog::catalog::CatalogLoader;
    /// use std::path::Path;
    ///
    /// let catalog = CatalogLoader::load_dir(Path::new("catalog"))?;
    /// # Ok::<(), tweak_catalog::catalog::CatalogLoadError>(())
    /// ```
    pub fn load_dir(dir: &Path) -> Result<Catalog, CatalogLoadError> {
        Self::load_dir_with_fs(dir, &RealFileSystem)
    }

    /// Load a catalog directory with a custom filesystem implementation
    pub fn load_dir_with_fs<FS: FileSystem>(dir: &Path, fs: &FS) -> Result<Catalog, CatalogLoadError> {
        let mut categories = BTreeMap::new();

        for category in Category::ALL {
            let path = dir.join(format!("{}.json", category.as_str()));
            let json = match fs.read_to_string(&path) {
                Ok(json) => json,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Err(CatalogLoadError::MissingFile { category, path });
                }
                Err(e) => {
                    return Err(CatalogLoadError::Io {
                        path,
                        message: e.to_string(),
                    });
                }
            };
            categories.insert(category, Self::parse_category(category, &json)?);
        }

        debug!("Loaded catalog from {}", dir.display());
        Ok(Catalog::from_categories(categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;

    // In-memory FileSystem for loader tests
    struct MockFileSystem {
        files: HashMap<PathBuf, String>,
        fail_with: Option<io::ErrorKind>,
    }

    impl MockFileSystem {
        fn with_every_category(json: &str) -> Self {
            let files = Category::ALL
                .iter()
                .map(|c| {
                    (
                        PathBuf::from("/data").join(format!("{}.json", c.as_str())),
                        json.to_string(),
                    )
                })
                .collect();
            Self {
                files,
                fail_with: None,
            }
        }
    }

    impl FileSystem for MockFileSystem {
        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            unimplemented!()
        }

        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            if let Some(kind) = self.fail_with {
                return Err(io::Error::new(kind, "mock failure"));
            }
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
        }

        fn write(&self, _path: &Path, _contents: impl AsRef<[u8]>) -> io::Result<()> {
            unimplemented!()
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }
    }

    const ONE_TWEAK: &str = r#"{
        "en": [{"id": "a", "name": "A", "description": "d", "benefit": "b", "impactLevel": "low",
                "subsections": [{"title": "t", "content": "c"}]}],
        "es": [{"id": "a", "name": "A", "description": "d", "benefit": "b", "impactLevel": "low",
                "subsections": [{"title": "t", "content": "c"}]}]
    }"#;

    #[test]
    fn test_parse_category_keeps_locales_and_order() {
        let json = r#"{
            "en": [
                {"id": "second", "name": "2", "description": "d", "benefit": "b", "impactLevel": "high", "subsections": []},
                {"id": "first", "name": "1", "description": "d", "benefit": "b", "impactLevel": "low", "subsections": []}
            ]
        }"#;
        let parsed = CatalogLoader::parse_category(Category::Gpu, json).unwrap();
        let ids: Vec<&str> = parsed
            .tweaks(&Locale::EN)
            .unwrap()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["second", "first"]);
        assert!(parsed.tweaks(&Locale::ES).is_none());
    }

    #[test]
    fn test_parse_category_reports_category_on_syntax_error() {
        let err = CatalogLoader::parse_category(Category::Memory, "{ not json").unwrap_err();
        match err {
            CatalogLoadError::Parse { category, .. } => assert_eq!(category, Category::Memory),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_category_rejects_bad_locale_key() {
        let err = CatalogLoader::parse_category(Category::Gpu, r#"{"english": []}"#).unwrap_err();
        assert_eq!(
            err,
            CatalogLoadError::InvalidLocale {
                category: Category::Gpu,
                key: "english".to_string()
            }
        );
    }

    #[test]
    fn test_parse_category_rejects_locale_keys_differing_in_case() {
        let json = r#"{
            "EN": [{"id": "a", "name": "A", "description": "d", "benefit": "b",
                    "impactLevel": "low", "subsections": []}],
            "en": []
        }"#;
        let err = CatalogLoader::parse_category(Category::Gpu, json).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::DuplicateLocale {
                category: Category::Gpu,
                ..
            }
        ));
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_parse_category_rejects_invalid_subsection_shape() {
        let json = r#"{"en": [{"id": "a", "name": "A", "description": "d", "benefit": "b",
            "impactLevel": "low", "subsections": [{"title": "t"}]}]}"#;
        let err = CatalogLoader::parse_category(Category::Gpu, json).unwrap_err();
        assert!(err.to_string().contains("neither content nor command"));
    }

    #[test]
    fn test_load_embedded_succeeds() {
        let catalog = CatalogLoader::load_embedded().unwrap();
        for category in Category::ALL {
            assert!(catalog.get_tweaks(category, "en").is_ok());
        }
    }

    #[test]
    fn test_load_dir_with_fs_reads_every_category() {
        let fs = MockFileSystem::with_every_category(ONE_TWEAK);
        let catalog = CatalogLoader::load_dir_with_fs(Path::new("/data"), &fs).unwrap();
        for category in Category::ALL {
            assert_eq!(catalog.get_tweaks(category, "es").unwrap().len(), 1);
        }
    }

    #[test]
    fn test_load_dir_with_missing_category_file() {
        let mut fs = MockFileSystem::with_every_category(ONE_TWEAK);
        fs.files.remove(&PathBuf::from("/data/latency_timers.json"));

        let err = CatalogLoader::load_dir_with_fs(Path::new("/data"), &fs).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::MissingFile {
                category: Category::LatencyTimers,
                ..
            }
        ));
    }

    #[test]
    fn test_load_dir_with_read_error_returns_io() {
        let mut fs = MockFileSystem::with_every_category(ONE_TWEAK);
        fs.fail_with = Some(io::ErrorKind::PermissionDenied);

        let err = CatalogLoader::load_dir_with_fs(Path::new("/data"), &fs).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }

    #[test]
    fn test_load_dir_from_real_directory() {
        let temp = tempfile::tempdir().unwrap();
        for category in Category::ALL {
            std::fs::write(
                temp.path().join(format!("{}.json", category.as_str())),
                ONE_TWEAK,
            )
            .unwrap();
        }
        let catalog = CatalogLoader::load_dir(temp.path()).unwrap();
        assert_eq!(
            catalog.get_tweak_by_id(Category::Network, "en", "a").unwrap().name,
            "A"
        );
    }
}
