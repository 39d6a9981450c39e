//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Documentation links
//! - Proper exit codes for scripting
//!
//! # Examples
//!
//! ```
//! use tweak_catalog::catalog::{Catalog, Category};
//! use tweak_catalog::error::TweakCatalogError;
//!
//! let catalog = Catalog::builtin()?;
//! let err = catalog
//!     .get_tweak_by_id(Category::Gpu, "en", "no-such-tweak")
//!     .map_err(TweakCatalogError::from)
//!     .unwrap_err();
//!
//! assert_eq!(err.exit_code(), 66);
//! assert!(err.suggestion().unwrap().contains("tweak-catalog list gpu"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::{CatalogLoadError, InvalidLocaleCode, NotFoundError};

const DOCS_BASE: &str = "https://www.codextreme.me/guias";

/// Top-level errors reported by the command line
#[derive(Error, Debug)]
pub enum TweakCatalogError {
    /// Lookup missed a category, locale or tweak
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Catalog data could not be loaded
    #[error(transparent)]
    Load(#[from] CatalogLoadError),

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to config file
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Configuration file exists but is malformed or inconsistent
    #[error("Invalid configuration in {path}: {message}")]
    InvalidConfig {
        /// Path to config file
        path: PathBuf,
        /// What is wrong with it
        message: String,
    },

    /// Malformed locale code given on the command line or in config
    #[error(transparent)]
    InvalidLocale(#[from] InvalidLocaleCode),

    /// Catalog validation reported errors
    #[error("Catalog validation failed with {errors} error(s)")]
    ValidationFailed {
        /// Number of error-level issues
        errors: usize,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl TweakCatalogError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tweak_catalog::catalog::NotFoundError;
    /// use tweak_catalog::error::TweakCatalogError;
    ///
    /// let error = TweakCatalogError::from(NotFoundError::Category {
    ///     name: "audio".to_string(),
    /// });
    ///
    /// let suggestion = error.suggestion().unwrap();
    /// assert!(suggestion.contains("tweak-catalog categories"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::NotFound(NotFoundError::Category { .. }) => {
                Some("Run 'tweak-catalog categories' to see valid category names".to_string())
            }
            Self::NotFound(NotFoundError::Locale { category, .. }) => Some(format!(
                "The catalog has no data for '{}' in its default locale; check the catalog directory",
                category
            )),
            Self::NotFound(NotFoundError::Tweak {
                category, locale, ..
            }) => Some(format!(
                "Run 'tweak-catalog list {} --locale {}' to see available ids",
                category, locale
            )),
            Self::Load(CatalogLoadError::MissingFile { category, .. }) => Some(format!(
                "Add {}.json to the catalog directory or remove 'catalog-dir' from the config",
                category
            )),
            Self::Load(_) => Some(
                "Run 'tweak-catalog validate' against the built-in catalog to compare".to_string(),
            ),
            Self::ConfigNotFound { .. } => {
                Some("Run 'tweak-catalog init' to create a configuration file".to_string())
            }
            Self::InvalidConfig { .. } => Some(
                "Fix the listed key or delete the file and run 'tweak-catalog init'".to_string(),
            ),
            Self::InvalidLocale(_) => {
                Some("Use a two- or three-letter language code such as 'en' or 'es'".to_string())
            }
            Self::ValidationFailed { .. } => Some(
                "Run 'tweak-catalog validate --json' for machine-readable details".to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::NotFound(NotFoundError::Tweak { .. }) => Some(DOCS_BASE),
            Self::ConfigNotFound { .. } | Self::InvalidConfig { .. } => {
                Some("https://www.codextreme.me/herramientas")
            }
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use tweak_catalog::error::TweakCatalogError;
    ///
    /// let error = TweakCatalogError::ValidationFailed { errors: 3 };
    /// assert_eq!(error.exit_code(), 1); // Generic error for CI failure
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 66,            // EX_NOINPUT (sysexits.h)
            Self::Load(CatalogLoadError::Io { .. }) => 74, // EX_IOERR
            Self::Load(_) => 65,                // EX_DATAERR
            Self::ConfigNotFound { .. } => 66,  // EX_NOINPUT
            Self::InvalidConfig { .. } => 78,   // EX_CONFIG
            Self::InvalidLocale(_) => 64,       // EX_USAGE
            Self::ValidationFailed { .. } => 1, // Generic error (CI should fail)
            Self::Io { .. } => 74,              // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(tc_error) = Self::downcast(error) {
            if let Some(suggestion) = tc_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = tc_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(tc_error) = Self::downcast(error) {
            tc_error.exit_code()
        } else {
            1 // Generic error
        }
    }

    fn downcast(error: &anyhow::Error) -> Option<&TweakCatalogError> {
        error.downcast_ref::<TweakCatalogError>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Locale};

    fn sample_errors() -> Vec<TweakCatalogError> {
        vec![
            NotFoundError::Category {
                name: "audio".to_string(),
            }
            .into(),
            NotFoundError::Locale {
                category: Category::Gpu,
                requested: "fr".to_string(),
                fallback: Locale::EN,
            }
            .into(),
            NotFoundError::Tweak {
                category: Category::Memory,
                locale: Locale::ES,
                id: "missing".to_string(),
            }
            .into(),
            CatalogLoadError::Parse {
                category: Category::Network,
                message: "expected value".to_string(),
            }
            .into(),
            CatalogLoadError::MissingFile {
                category: Category::Gpu,
                path: PathBuf::from("data/gpu.json"),
            }
            .into(),
            TweakCatalogError::ConfigNotFound {
                path: PathBuf::from(".tweak-catalog.toml"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            },
            TweakCatalogError::InvalidConfig {
                path: PathBuf::from(".tweak-catalog.toml"),
                message: "bad base-url".to_string(),
            },
            InvalidLocaleCode {
                code: "english".to_string(),
            }
            .into(),
            TweakCatalogError::ValidationFailed { errors: 2 },
            TweakCatalogError::Io {
                context: "writing sitemap.xml".to_string(),
                source: std::io::Error::other("disk full"),
            },
        ]
    }

    #[test]
    fn test_all_error_variants_have_exit_codes() {
        for err in sample_errors() {
            let exit_code = err.exit_code();
            assert!(exit_code > 0, "Error {:?} should have non-zero exit code", err);
            assert!(exit_code < 256, "Exit code should fit in a byte");
        }
    }

    #[test]
    fn test_all_error_variants_have_suggestions() {
        for err in &sample_errors() {
            let suggestion = err.suggestion();
            assert!(suggestion.is_some(), "Error {:?} should have a suggestion", err);
            assert!(!suggestion.unwrap().is_empty());
        }
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        let errors = sample_errors();
        assert_eq!(errors[0].exit_code(), 66); // unknown category
        assert_eq!(errors[3].exit_code(), 65); // parse failure
        assert_eq!(errors[7].exit_code(), 64); // bad locale argument
        assert_eq!(errors[9].exit_code(), 74); // I/O
    }

    #[test]
    fn test_not_found_message_is_transparent() {
        let err = TweakCatalogError::from(NotFoundError::Category {
            name: "audio".to_string(),
        });
        assert_eq!(
            err.to_string(),
            NotFoundError::Category {
                name: "audio".to_string()
            }
            .to_string()
        );
    }

    #[test]
    fn test_tweak_not_found_suggests_listing() {
        let err = TweakCatalogError::from(NotFoundError::Tweak {
            category: Category::Memory,
            locale: Locale::ES,
            id: "missing".to_string(),
        });
        let suggestion = err.suggestion().unwrap();
        assert!(suggestion.contains("list memory --locale es"));
        assert!(err.docs_url().is_some());
    }

    #[test]
    fn test_formatter_includes_help_and_chain() {
        let err = anyhow::Error::new(TweakCatalogError::Io {
            context: "reading catalog".to_string(),
            source: std::io::Error::other("denied"),
        });
        let output = ErrorFormatter::format(&err);
        assert!(output.contains("I/O error: reading catalog"));
        assert!(output.contains("caused by:"));
        assert!(output.contains("help:"));
        assert_eq!(ErrorFormatter::exit_code(&err), 74);
    }

    #[test]
    fn test_formatter_generic_error_exit_code() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
        assert!(!ErrorFormatter::format(&err).contains("help:"));
    }
}
