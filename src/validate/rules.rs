//! Built-in catalog rules

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

use super::registry::CatalogRule;
use super::{ValidationIssue, ValidationResult};
use crate::catalog::{Catalog, Category, Locale, Subsection, Tweak};

static KEBAB_CASE_RE: OnceLock<Regex> = OnceLock::new();

fn kebab_case_regex() -> &'static Regex {
    KEBAB_CASE_RE.get_or_init(|| {
        // Literal pattern, checked by the id-format tests.
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("kebab-case regex is valid")
    })
}

fn location(category: Category, locale: &Locale, id: &str) -> String {
    format!("{}/{}/{}", category, locale, id)
}

/// Tweaks of every locale of every category, grouped per category
fn by_category(catalog: &Catalog) -> BTreeMap<Category, Vec<(&Locale, &[Tweak])>> {
    let mut grouped: BTreeMap<Category, Vec<(&Locale, &[Tweak])>> = BTreeMap::new();
    for (category, locale, tweaks) in catalog.partitions() {
        grouped.entry(category).or_default().push((locale, tweaks));
    }
    grouped
}

/// Every category has data for the fallback locale
pub struct DefaultLocaleRule;

impl CatalogRule for DefaultLocaleRule {
    fn name(&self) -> &str {
        "default-locale"
    }

    fn check(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::success();
        let default = catalog.default_locale();

        for category in Category::ALL {
            match catalog.category(category) {
                Err(_) => result.add_issue(
                    ValidationIssue::error(category.as_str(), "Category has no data")
                        .with_suggestion(format!("Add catalog/{}.json", category)),
                ),
                Ok(data) if data.tweaks(default).is_none() => result.add_issue(
                    ValidationIssue::error(
                        format!("{}/{}", category, default),
                        format!("No '{}' tweaks, so locale fallback cannot succeed", default),
                    )
                    .with_suggestion(format!("Add a \"{}\" list to {}.json", default, category)),
                ),
                Ok(_) => {}
            }
        }

        result
    }

    fn priority(&self) -> u32 {
        10
    }
}

/// No two tweaks share an id within a category+locale partition
pub struct UniqueIdRule;

impl CatalogRule for UniqueIdRule {
    fn name(&self) -> &str {
        "unique-id"
    }

    fn check(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::success();

        for (category, locale, tweaks) in catalog.partitions() {
            let mut seen: HashMap<&str, usize> = HashMap::new();
            for (position, tweak) in tweaks.iter().enumerate() {
                if let Some(first) = seen.insert(tweak.id.as_str(), position) {
                    result.add_issue(
                        ValidationIssue::error(
                            location(category, locale, &tweak.id),
                            format!(
                                "Duplicate id at positions {} and {}",
                                first + 1,
                                position + 1
                            ),
                        )
                        .with_suggestion("Ids must be unique; rename or remove one entry"),
                    );
                }
            }
        }

        result
    }

    fn priority(&self) -> u32 {
        20
    }
}

/// An id belongs to one category only, so guide anchors never collide
pub struct CrossCategoryIdRule;

impl CatalogRule for CrossCategoryIdRule {
    fn name(&self) -> &str {
        "cross-category-id"
    }

    fn check(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::success();
        let mut owners: BTreeMap<&str, BTreeSet<Category>> = BTreeMap::new();

        for (category, _, tweaks) in catalog.partitions() {
            for tweak in tweaks {
                owners.entry(tweak.id.as_str()).or_default().insert(category);
            }
        }

        for (id, categories) in owners {
            if categories.len() > 1 {
                let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
                result.add_issue(
                    ValidationIssue::error(
                        id,
                        format!("Id is used by several categories ({})", names.join(", ")),
                    )
                    .with_suggestion("Deep links use the id alone; rename all but one"),
                );
            }
        }

        result
    }

    fn priority(&self) -> u32 {
        25
    }
}

/// Every locale of a category carries the same set of ids
pub struct LocaleParityRule;

impl CatalogRule for LocaleParityRule {
    fn name(&self) -> &str {
        "locale-parity"
    }

    fn check(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::success();

        for (category, partitions) in by_category(catalog) {
            let all_ids: BTreeSet<&str> = partitions
                .iter()
                .flat_map(|(_, tweaks)| tweaks.iter().map(|t| t.id.as_str()))
                .collect();

            for (locale, tweaks) in &partitions {
                let present: BTreeSet<&str> = tweaks.iter().map(|t| t.id.as_str()).collect();
                for missing in all_ids.difference(&present) {
                    result.add_issue(
                        ValidationIssue::error(
                            location(category, locale, missing),
                            format!("Missing '{}' translation", locale),
                        )
                        .with_suggestion(format!(
                            "Add a '{}' entry to the \"{}\" list of {}.json",
                            missing, locale, category
                        )),
                    );
                }
            }
        }

        result
    }

    fn priority(&self) -> u32 {
        30
    }
}

/// Translations of a tweak have the same number of steps
pub struct SubsectionParityRule;

impl CatalogRule for SubsectionParityRule {
    fn name(&self) -> &str {
        "subsection-parity"
    }

    fn check(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::success();

        for (category, partitions) in by_category(catalog) {
            let mut counts: BTreeMap<&str, Vec<(&Locale, usize)>> = BTreeMap::new();
            for (locale, tweaks) in &partitions {
                for tweak in tweaks.iter() {
                    counts
                        .entry(tweak.id.as_str())
                        .or_default()
                        .push((locale, tweak.subsections.len()));
                }
            }

            for (id, per_locale) in counts {
                let differs = per_locale.windows(2).any(|w| w[0].1 != w[1].1);
                if differs {
                    let detail: Vec<String> = per_locale
                        .iter()
                        .map(|(locale, n)| format!("{}={}", locale, n))
                        .collect();
                    result.add_issue(ValidationIssue::info(
                        format!("{}/{}", category, id),
                        format!("Subsection counts differ between locales ({})", detail.join(", ")),
                    ));
                }
            }
        }

        result
    }

    fn priority(&self) -> u32 {
        40
    }
}

/// Ids are lowercase kebab-case, safe for deep links
pub struct IdFormatRule;

impl CatalogRule for IdFormatRule {
    fn name(&self) -> &str {
        "id-format"
    }

    fn check(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::success();
        let re = kebab_case_regex();

        for (category, locale, tweaks) in catalog.partitions() {
            for tweak in tweaks {
                if !re.is_match(&tweak.id) {
                    result.add_issue(
                        ValidationIssue::warning(
                            location(category, locale, &tweak.id),
                            "Id is not lowercase kebab-case",
                        )
                        .with_suggestion("Use only a-z, 0-9 and single hyphens"),
                    );
                }
            }
        }

        result
    }
}

/// Command blocks name their script dialect
pub struct CommandLanguageRule;

impl CatalogRule for CommandLanguageRule {
    fn name(&self) -> &str {
        "command-language"
    }

    fn check(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::success();

        for (category, locale, tweaks) in catalog.partitions() {
            for tweak in tweaks {
                for subsection in tweak.commands() {
                    if subsection.language().is_none() {
                        result.add_issue(
                            ValidationIssue::warning(
                                location(category, locale, &tweak.id),
                                format!("Command '{}' has no language tag", subsection.title()),
                            )
                            .with_suggestion("Add \"language\": \"powershell\" (or the right dialect)"),
                        );
                    }
                }
            }
        }

        result
    }
}

/// User-facing text is never blank
pub struct NonEmptyTextRule;

impl NonEmptyTextRule {
    fn blank_fields(tweak: &Tweak) -> Vec<String> {
        let mut blank = Vec::new();
        for (field, value) in [
            ("name", &tweak.name),
            ("description", &tweak.description),
            ("benefit", &tweak.benefit),
        ] {
            if value.trim().is_empty() {
                blank.push(field.to_string());
            }
        }

        for (position, subsection) in tweak.subsections.iter().enumerate() {
            if subsection.title().trim().is_empty() {
                blank.push(format!("subsections[{}].title", position));
            }
            let blank_body = match subsection {
                Subsection::Text { content, .. } | Subsection::Annotated { content, .. } => {
                    content.trim().is_empty()
                }
                Subsection::Command { command, .. } => command.trim().is_empty(),
            };
            if blank_body {
                blank.push(format!("subsections[{}]", position));
            }
        }

        blank
    }
}

impl CatalogRule for NonEmptyTextRule {
    fn name(&self) -> &str {
        "non-empty-text"
    }

    fn check(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::success();

        for (category, locale, tweaks) in catalog.partitions() {
            for tweak in tweaks {
                if tweak.subsections.is_empty() {
                    result.add_issue(ValidationIssue::warning(
                        location(category, locale, &tweak.id),
                        "Tweak has no subsections",
                    ));
                }
                for field in Self::blank_fields(tweak) {
                    result.add_issue(ValidationIssue::warning(
                        location(category, locale, &tweak.id),
                        format!("Blank {}", field),
                    ));
                }
            }
        }

        result
    }
}
