//! Shared formatting utilities for console output

use console::{style, Emoji};

use crate::catalog::{ImpactLevel, NoteKind};

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Map emoji for site structure output
pub const MAP: Emoji = Emoji("🗺️", "#");

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Whether the `--no-emoji` flag (or a `NO_EMOJI` env var) is in effect
pub fn emoji_disabled() -> bool {
    std::env::var_os("NO_EMOJI").is_some_and(|v| !v.is_empty())
}

/// Render an emoji, honoring `NO_EMOJI`
///
/// # Examples
///
/// ```
/// use tweak_catalog::fmt::{icon, CHECKMARK};
///
/// let rendered = icon(CHECKMARK);
/// assert!(!rendered.is_empty());
/// ```
pub fn icon(emoji: Emoji<'_, '_>) -> String {
    if emoji_disabled() {
        emoji.1.to_string()
    } else {
        emoji.to_string()
    }
}

/// Render a category icon, honoring `NO_EMOJI`
///
/// Category icons carry no plain-text form, so a bullet stands in for them.
pub fn category_icon(glyph: &str) -> String {
    if emoji_disabled() {
        "*".to_string()
    } else {
        glyph.to_string()
    }
}

/// Styled impact badge for tweak listings
pub fn impact_badge(level: ImpactLevel) -> String {
    let label = format!("[{}]", level.as_str());
    match level {
        ImpactLevel::High => style(label).red().bold().to_string(),
        ImpactLevel::Medium => style(label).yellow().to_string(),
        ImpactLevel::Low => style(label).green().to_string(),
    }
}

/// Styled heading prefix for an annotated subsection
pub fn note_label(kind: NoteKind) -> String {
    match kind {
        NoteKind::Warning => format!("{} {}", icon(WARNING), style("Warning").yellow().bold()),
        NoteKind::Note => style("Note").cyan().bold().to_string(),
        NoteKind::Info => format!("{} {}", icon(INFO), style("Info").blue().bold()),
    }
}

/// Indent every line of `text` by `width` spaces
///
/// # Examples
///
/// ```
/// use tweak_catalog::fmt::indent;
///
/// assert_eq!(indent("a\nb", 2), "  a\n  b");
/// ```
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("one\n\ntwo", 3), "   one\n\n   two");
        assert_eq!(indent("", 4), "");
    }

    #[test]
    fn test_impact_badge_contains_level() {
        assert!(impact_badge(ImpactLevel::High).contains("high"));
        assert!(impact_badge(ImpactLevel::Low).contains("low"));
    }

    #[test]
    fn test_note_label_names_kind() {
        assert!(note_label(NoteKind::Warning).contains("Warning"));
        assert!(note_label(NoteKind::Note).contains("Note"));
        assert!(note_label(NoteKind::Info).contains("Info"));
    }
}
