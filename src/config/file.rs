//! Configuration file data structures

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::Locale;
use crate::error::TweakCatalogError;
use crate::sitemap::{self, Sitemap, CHANGEFREQ_VALUES};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".tweak-catalog.toml";

/// tweak-catalog configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Locale answered when the requested one has no data
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Directory of `<category>.json` files replacing the built-in catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,

    /// Sitemap settings
    #[serde(default)]
    pub sitemap: SitemapSettings,
}

fn default_locale() -> String {
    Locale::DEFAULT.to_string()
}

/// `[sitemap]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SitemapSettings {
    /// Site root, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `<changefreq>` value for every entry
    #[serde(default = "default_changefreq")]
    pub changefreq: String,

    /// Paths to list, `""` being the home page
    #[serde(default = "sitemap::default_pages")]
    pub pages: Vec<String>,
}

fn default_base_url() -> String {
    sitemap::DEFAULT_BASE_URL.to_string()
}

fn default_changefreq() -> String {
    sitemap::DEFAULT_CHANGEFREQ.to_string()
}

impl Default for SitemapSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            changefreq: default_changefreq(),
            pages: sitemap::default_pages(),
        }
    }
}

impl SitemapSettings {
    /// Validate base URL scheme and change frequency
    pub fn validate(&self) -> Result<()> {
        let has_scheme = ["http://", "https://"]
            .iter()
            .any(|scheme| self.base_url.starts_with(scheme));
        if !has_scheme {
            anyhow::bail!(
                "sitemap.base-url '{}' must start with http:// or https://",
                self.base_url
            );
        }

        if !CHANGEFREQ_VALUES.contains(&self.changefreq.as_str()) {
            anyhow::bail!(
                "sitemap.changefreq '{}' is not one of: {}",
                self.changefreq,
                CHANGEFREQ_VALUES.join(", ")
            );
        }

        Ok(())
    }

    /// Generator configured from these settings
    pub fn to_sitemap(&self) -> Sitemap {
        Sitemap::new(self.base_url.trim_end_matches('/'), self.pages.clone())
            .with_changefreq(self.changefreq.clone())
    }
}

impl ConfigFile {
    /// Validate every key
    pub fn validate(&self) -> Result<()> {
        self.locale()?;
        self.sitemap.validate()
    }

    /// Parsed `default-locale`
    pub fn locale(&self) -> Result<Locale> {
        Locale::parse(&self.default_locale)
            .map_err(TweakCatalogError::from)
            .context("default-locale")
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            catalog_dir: None,
            sitemap: SitemapSettings::default(),
        }
    }
}
