//! Show command implementation
//!
//! Handles the `tweak-catalog show` command which prints a single tweak with
//! every subsection in order. Commands are printed verbatim so they can be
//! copied into an elevated shell.

use anyhow::Result;
use console::style;
use serde::Serialize;
use std::path::Path;

use super::context::CommandContext;
use crate::catalog::{Category, Subsection, Tweak};
use crate::error::TweakCatalogError;
use crate::fmt::{category_icon, impact_badge, indent, note_label};
use crate::routing::tweak_deep_link;

/// JSON shape of `show --json`
#[derive(Debug, Serialize)]
struct ShownTweak<'a> {
    category: Category,
    locale: &'a str,
    url: String,
    #[serde(flatten)]
    tweak: &'a Tweak,
}

/// Render one subsection for the terminal
pub fn render_subsection(subsection: &Subsection) -> String {
    let mut out = String::new();
    match subsection {
        Subsection::Annotated { kind, .. } => {
            out.push_str(&format!("{} {}\n", note_label(*kind), style(subsection.title()).bold()));
        }
        _ => out.push_str(&format!("{}\n", style(subsection.title()).bold())),
    }

    if let Some(content) = subsection.content() {
        out.push_str(&indent(content, 2));
        out.push('\n');
    }

    if let Some(command) = subsection.command() {
        let language = subsection.language().unwrap_or("shell");
        out.push_str(&format!("  {}\n", style(format!("[{}]", language)).dim()));
        // Verbatim, no styling: users paste this into a shell.
        out.push_str(&indent(command, 4));
        out.push('\n');
    }

    out
}

/// Show one tweak
///
/// # Examples
///
/// ```no_run
/// use tweak_catalog::cmd::show::cmd_show;
///
/// cmd_show(None, "firewall_security", "block-smb-port", None, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_show(
    config: Option<&Path>,
    category: &str,
    id: &str,
    locale: Option<&str>,
    json: bool,
) -> Result<()> {
    let ctx = CommandContext::load(config)?;
    let category: Category = category.parse().map_err(TweakCatalogError::from)?;
    let requested = ctx.locale(locale);

    let catalog = ctx.catalog();
    let resolved = catalog
        .resolve_locale(category, requested)
        .map_err(TweakCatalogError::from)?;
    let tweak = catalog
        .get_tweak_by_id(category, requested, id)
        .map_err(TweakCatalogError::from)?;
    let url = tweak_deep_link(
        &ctx.config.sitemap.base_url,
        resolved,
        ctx.default_locale(),
        &tweak.id,
    );

    if json {
        let shown = ShownTweak {
            category,
            locale: resolved.as_str(),
            url,
            tweak,
        };
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        category_icon(catalog.get_category_meta(category).icon),
        style(&tweak.name).bold(),
        impact_badge(tweak.impact_level)
    );
    println!("{}", style(url).dim().underlined());
    println!();
    println!("{}", tweak.description);
    println!();
    println!("{} {}", style("Benefit:").green().bold(), tweak.benefit);

    for subsection in &tweak.subsections {
        println!();
        print!("{}", render_subsection(subsection));
    }

    Ok(())
}
