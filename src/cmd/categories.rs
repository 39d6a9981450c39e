//! Categories command implementation
//!
//! Handles the `tweak-catalog categories` command which lists every category
//! with its icon and per-locale tweak counts.

use anyhow::Result;
use console::style;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::context::CommandContext;
use crate::catalog::{Catalog, Category, ColorScheme};
use crate::error::TweakCatalogError;
use crate::fmt::category_icon;

/// One row of the categories listing
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    /// Category identifier
    pub name: Category,
    /// Emoji icon
    pub icon: &'static str,
    /// Gradient classes
    pub colors: ColorScheme,
    /// Tweak count per locale
    pub tweaks: BTreeMap<String, usize>,
}

/// Summarize every category of a catalog, in declared order
pub fn summarize(catalog: &Catalog) -> Result<Vec<CategorySummary>, TweakCatalogError> {
    catalog
        .list_categories()
        .iter()
        .map(|&category| {
            let meta = catalog.get_category_meta(category);
            let data = catalog.category(category)?;
            let tweaks = data
                .locales()
                .map(|locale| {
                    let count = data.tweaks(locale).map_or(0, <[_]>::len);
                    (locale.to_string(), count)
                })
                .collect();
            Ok(CategorySummary {
                name: category,
                icon: meta.icon,
                colors: meta.colors,
                tweaks,
            })
        })
        .collect()
}

/// List categories with icons and per-locale counts
///
/// # Examples
///
/// ```no_run
/// use tweak_catalog::cmd::categories::cmd_categories;
///
/// cmd_categories(None, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_categories(config: Option<&Path>, json: bool) -> Result<()> {
    let ctx = CommandContext::load(config)?;
    let summaries = summarize(ctx.catalog())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{}", style("Tweak categories").bold());
    println!();
    for summary in &summaries {
        let counts: Vec<String> = summary
            .tweaks
            .iter()
            .map(|(locale, count)| format!("{} {}", locale, count))
            .collect();
        println!(
            "  {} {:<22} {}",
            category_icon(summary.icon),
            style(summary.name).cyan().bold(),
            style(counts.join(", ")).dim()
        );
    }

    Ok(())
}
