//! List command implementation
//!
//! Handles the `tweak-catalog list` command which prints the tweaks of one
//! category in their declared order.

use anyhow::Result;
use console::style;
use std::path::Path;

use super::context::CommandContext;
use crate::catalog::{Category, Locale};
use crate::error::TweakCatalogError;
use crate::fmt::{category_icon, icon, impact_badge, WARNING};

/// List tweaks of a category
///
/// Unsupported locales fall back to the configured default.
///
/// # Examples
///
/// ```no_run
/// use tweak_catalog::cmd::list::cmd_list;
///
/// cmd_list(None, "gpu", Some("es"), false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_list(config: Option<&Path>, category: &str, locale: Option<&str>, json: bool) -> Result<()> {
    let ctx = CommandContext::load(config)?;
    let category: Category = category.parse().map_err(TweakCatalogError::from)?;
    let requested = ctx.locale(locale);

    let catalog = ctx.catalog();
    let resolved = catalog
        .resolve_locale(category, requested)
        .map_err(TweakCatalogError::from)?;
    let tweaks = catalog
        .get_tweaks(category, requested)
        .map_err(TweakCatalogError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(tweaks)?);
        return Ok(());
    }

    let meta = catalog.get_category_meta(category);
    println!(
        "{} {} {}",
        category_icon(meta.icon),
        style(category).bold(),
        style(format!("({})", resolved)).dim()
    );
    if Locale::parse(requested).ok().as_ref() != Some(resolved) {
        println!(
            "   {}",
            style(format!("no '{}' data, showing '{}'", requested, resolved)).yellow()
        );
    }
    println!();

    for tweak in tweaks {
        let warning = if tweak.has_warning() {
            format!(" {}", icon(WARNING))
        } else {
            String::new()
        };
        println!(
            "  {:<8} {} {}{}",
            impact_badge(tweak.impact_level),
            style(&tweak.id).cyan(),
            tweak.name,
            warning
        );
        println!("           {}", style(&tweak.benefit).dim());
    }

    Ok(())
}
