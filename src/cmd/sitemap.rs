//! Sitemap command implementation
//!
//! Handles the `tweak-catalog sitemap` command which writes the site's
//! sitemap XML to stdout or a file.

use anyhow::{Context, Result};
use console::style;
use std::env;
use std::path::Path;

use crate::config::{ConfigFile, ConfigLoader};
use crate::error::TweakCatalogError;
use crate::fmt::{icon, MAP};
use crate::infra::{FileSystem, RealFileSystem};
use crate::sitemap::CivilDate;

/// Generate the sitemap
///
/// `base_url` overrides `sitemap.base-url` from the config; `date`
/// (`YYYY-MM-DD`) overrides today's date.
///
/// # Examples
///
/// ```no_run
/// use tweak_catalog::cmd::sitemap::cmd_sitemap;
///
/// cmd_sitemap(None, Some("https://example.com"), None, Some("2025-01-31"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_sitemap(
    config: Option<&Path>,
    base_url: Option<&str>,
    output: Option<&Path>,
    date: Option<&str>,
) -> Result<()> {
    let mut config = match config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => ConfigLoader::load(&env::current_dir().context("Failed to get current directory")?)?,
    };
    if let Some(base_url) = base_url {
        config.sitemap.base_url = base_url.to_string();
        config.sitemap.validate()?;
    }

    let date = match date {
        Some(d) => d.parse::<CivilDate>()?,
        None => CivilDate::today(),
    };

    generate(&config, date, output, &RealFileSystem)
}

/// Render the sitemap for `config` and write it to `output` (or stdout)
pub fn generate<FS: FileSystem>(
    config: &ConfigFile,
    date: CivilDate,
    output: Option<&Path>,
    fs: &FS,
) -> Result<()> {
    let sitemap = config.sitemap.to_sitemap();
    let xml = sitemap.render(date);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs.create_dir_all(parent)
                    .map_err(|source| TweakCatalogError::Io {
                        context: format!("creating {}", parent.display()),
                        source,
                    })?;
            }
            fs.write(path, format!("{}\n", xml))
                .map_err(|source| TweakCatalogError::Io {
                    context: format!("writing {}", path.display()),
                    source,
                })?;
            eprintln!(
                "{} Wrote {} URLs to {}",
                icon(MAP),
                sitemap.pages().len(),
                style(path.display()).cyan()
            );
        }
        None => println!("{}", xml),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_file_in_new_directory() {
        let temp = tempfile::tempdir().unwrap();
        let output = temp.path().join("public").join("sitemap.xml");

        let mut config = ConfigFile::default();
        config.sitemap.base_url = "https://example.com".to_string();
        config.sitemap.pages = vec!["".to_string(), "/a".to_string()];

        generate(&config, CivilDate::new(2025, 1, 31), Some(&output), &RealFileSystem).unwrap();

        let xml = std::fs::read_to_string(&output).unwrap();
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/a</loc>"));
        assert!(xml.contains("<lastmod>2025-01-31</lastmod>"));
    }

    #[test]
    fn test_generate_write_failure_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file
        let err = generate(
            &ConfigFile::default(),
            CivilDate::new(2025, 1, 1),
            Some(temp.path()),
            &RealFileSystem,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TweakCatalogError>(),
            Some(TweakCatalogError::Io { .. })
        ));
    }
}
