//! Validate command implementation
//!
//! Handles the `tweak-catalog validate` command which runs every built-in
//! rule against the configured catalog.

use anyhow::Result;
use console::style;
use log::info;
use std::path::Path;

use super::context::CommandContext;
use crate::error::TweakCatalogError;
use crate::fmt::{icon, CHECKMARK, CROSSMARK, MICROSCOPE};
use crate::validate::{RuleRegistry, ValidationResult, ValidationSeverity};

/// Render a validation report for the terminal
pub fn render_report(result: &ValidationResult) -> String {
    let mut out = String::new();
    for issue in &result.issues {
        let label = match issue.severity {
            ValidationSeverity::Error => style(issue.severity.as_str()).red().bold(),
            ValidationSeverity::Warning => style(issue.severity.as_str()).yellow().bold(),
            ValidationSeverity::Info => style(issue.severity.as_str()).blue(),
        };
        out.push_str(&format!(
            "  {:<7} {} {}\n",
            label,
            style(&issue.location).cyan(),
            issue.message
        ));
        if let Some(suggestion) = &issue.suggestion {
            out.push_str(&format!("          {}\n", style(suggestion).dim()));
        }
    }
    out
}

/// Validate the catalog
///
/// Fails with [`TweakCatalogError::ValidationFailed`] when any rule reports an
/// error-level issue. Warnings and infos are printed but do not fail.
pub fn cmd_validate(config: Option<&Path>, json: bool) -> Result<()> {
    let ctx = CommandContext::load(config)?;
    let registry = RuleRegistry::with_builtin_rules();

    if !json {
        println!(
            "{} Running {} rules over {} tweaks",
            icon(MICROSCOPE),
            registry.count(),
            ctx.catalog().len()
        );
        println!();
    }

    let result = registry.run(ctx.catalog());
    let errors = result.errors().len();
    info!(
        "Validation finished: {} error(s), {} warning(s)",
        errors,
        result.warnings().len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
        if result.valid {
            println!("{} Catalog is valid", icon(CHECKMARK));
        } else {
            println!("{} Catalog has {} error(s)", icon(CROSSMARK), errors);
        }
    }

    if result.has_errors() {
        return Err(TweakCatalogError::ValidationFailed { errors }.into());
    }
    Ok(())
}
