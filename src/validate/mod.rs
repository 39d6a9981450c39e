//! Catalog validation system
//!
//! Provides pluggable rules that check catalog data for defects such as
//! missing translations, duplicate ids or command blocks without a language
//! tag. Rules are collected in a [`RuleRegistry`] and run in priority order.

pub mod registry;
pub mod rules;

use serde::Serialize;

pub use registry::{CatalogRule, RuleRegistry};
pub use rules::{
    CommandLanguageRule, CrossCategoryIdRule, DefaultLocaleRule, IdFormatRule, LocaleParityRule,
    NonEmptyTextRule, SubsectionParityRule, UniqueIdRule,
};

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    /// Informational message
    Info,
    /// Warning - should be addressed but not blocking
    Warning,
    /// Error - data defect that must be fixed
    Error,
}

impl ValidationSeverity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationSeverity::Info => "INFO",
            ValidationSeverity::Warning => "WARNING",
            ValidationSeverity::Error => "ERROR",
        }
    }
}

/// A defect found in catalog data
///
/// # Examples
///
/// ```
/// use tweak_catalog::validate::{ValidationIssue, ValidationSeverity};
///
/// let issue = ValidationIssue::error("network/es", "Missing translation of 'ecn'")
///     .with_suggestion("Add an 'ecn' entry to the es list");
/// assert_eq!(issue.severity, ValidationSeverity::Error);
/// assert!(issue.suggestion.is_some());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Severity level
    pub severity: ValidationSeverity,
    /// Where the issue is, as `category[/locale[/id]]`
    pub location: String,
    /// Description of the issue
    pub message: String,
    /// Suggested fix (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(
        severity: ValidationSeverity,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            location: location.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create an error issue
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Error, location, message)
    }

    /// Create a warning issue
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Warning, location, message)
    }

    /// Create an info issue
    pub fn info(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Info, location, message)
    }
}

/// Result of catalog validation
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Whether validation passed (no errors)
    pub valid: bool,
    /// Issues found during validation
    pub issues: Vec<ValidationIssue>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    /// Create a result from a list of issues
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let has_errors = issues
            .iter()
            .any(|i| i.severity == ValidationSeverity::Error);
        Self {
            valid: !has_errors,
            issues,
        }
    }

    /// Add an issue
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        if issue.severity == ValidationSeverity::Error {
            self.valid = false;
        }
        self.issues.push(issue);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        for issue in other.issues {
            self.add_issue(issue);
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.valid
    }

    /// Issues of one severity
    pub fn with_severity(&self, severity: ValidationSeverity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect()
    }

    /// Get only errors
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.with_severity(ValidationSeverity::Error)
    }

    /// Get only warnings
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.with_severity(ValidationSeverity::Warning)
    }
}
