//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

use super::model::{Category, Locale, NoteKind};

/// A lookup key did not match anything in the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// Category name outside the fixed enumeration, or absent from a loaded catalog
    #[error("Unknown category: '{name}'")]
    Category {
        /// Requested category name
        name: String,
    },

    /// Neither the requested nor the fallback locale has data
    #[error("No '{requested}' or '{fallback}' tweaks for category '{category}'")]
    Locale {
        /// Category that was queried
        category: Category,
        /// Locale code the caller asked for
        requested: String,
        /// Configured fallback locale
        fallback: Locale,
    },

    /// No tweak with this id in the resolved partition
    #[error("Tweak '{id}' not found in {category}/{locale}")]
    Tweak {
        /// Category that was queried
        category: Category,
        /// Locale the request resolved to
        locale: Locale,
        /// Requested tweak id
        id: String,
    },
}

/// Catalog data could not be turned into a [`Catalog`](super::Catalog)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogLoadError {
    /// JSON syntax or schema violation
    #[error("Failed to parse {category} catalog: {message}")]
    Parse {
        /// Category whose file failed
        category: Category,
        /// Parser message, including line and column
        message: String,
    },

    /// Top-level key is not a language code
    #[error("Invalid locale key '{key}' in {category} catalog")]
    InvalidLocale {
        /// Category whose file failed
        category: Category,
        /// Offending key
        key: String,
    },

    /// Two keys name the same locale once case is normalised
    #[error("Locale '{key}' appears more than once in {category} catalog")]
    DuplicateLocale {
        /// Category whose file failed
        category: Category,
        /// Second key seen for the locale
        key: String,
    },

    /// Catalog directory lacks a category file
    #[error("Catalog file for {category} not found: {}", path.display())]
    MissingFile {
        /// Category without data
        category: Category,
        /// Expected file location
        path: PathBuf,
    },

    /// Category file exists but could not be read
    #[error("Failed to read {}: {message}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// I/O error description
        message: String,
    },
}

/// The flat subsection fields form no valid subsection variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubsectionError {
    /// Subsection has neither content nor command
    #[error("subsection '{title}' has neither content nor command")]
    Empty {
        /// Subsection heading
        title: String,
    },

    /// Command blocks cannot also be warning/note/info boxes
    #[error("subsection '{title}' combines a command with a '{}' annotation", kind.as_str())]
    AnnotatedCommand {
        /// Subsection heading
        title: String,
        /// Annotation that was supplied
        kind: NoteKind,
    },

    /// Language tag given without a command to highlight
    #[error("subsection '{title}' has a language tag but no command")]
    LanguageWithoutCommand {
        /// Subsection heading
        title: String,
    },
}

/// Language code is not 2-3 ASCII letters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid locale code '{code}': expected 2-3 ASCII letters")]
pub struct InvalidLocaleCode {
    /// Rejected input
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_name_the_missing_key() {
        let err = NotFoundError::Tweak {
            category: Category::Gpu,
            locale: Locale::ES,
            id: "tdr-timeout".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tdr-timeout"));
        assert!(msg.contains("gpu/es"));

        let err = NotFoundError::Locale {
            category: Category::Memory,
            requested: "fr".to_string(),
            fallback: Locale::EN,
        };
        assert!(err.to_string().contains("'fr' or 'en'"));
    }

    #[test]
    fn test_missing_file_message_includes_path() {
        let err = CatalogLoadError::MissingFile {
            category: Category::Network,
            path: PathBuf::from("data/network.json"),
        };
        assert!(err.to_string().contains("data/network.json"));
    }

    #[test]
    fn test_annotated_command_message_names_kind() {
        let err = SubsectionError::AnnotatedCommand {
            title: "Apply".to_string(),
            kind: NoteKind::Warning,
        };
        assert!(err.to_string().contains("'warning'"));
    }
}
