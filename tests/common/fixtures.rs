//! Test fixture helpers for catalog directories and config files
//!
//! Catalog fixtures start from the JSON files shipped with the crate so
//! tests can break exactly one thing at a time.

#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Directory holding the shipped catalog files
pub fn shipped_catalog_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("catalog")
}

/// Copy of the shipped catalog in `<temp>/data`
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the catalog directory) - the TempDir must be kept alive
pub fn create_catalog_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let data = temp_dir.path().join("data");
    fs::create_dir(&data)?;

    for entry in fs::read_dir(shipped_catalog_dir())? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == "json") {
            if let Some(name) = path.file_name() {
                fs::copy(&path, data.join(name))?;
            }
        }
    }

    Ok((temp_dir, data))
}

/// Rewrite one category file through a JSON edit
pub fn edit_category(
    data_dir: &Path,
    category: &str,
    edit: impl FnOnce(&mut Value),
) -> anyhow::Result<()> {
    let path = data_dir.join(format!("{}.json", category));
    let mut value: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    edit(&mut value);
    fs::write(&path, serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

/// Write `.tweak-catalog.toml` into `dir`
pub fn write_config(dir: &Path, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(".tweak-catalog.toml");
    fs::write(&path, contents)?;
    Ok(path)
}
