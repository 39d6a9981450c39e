//! Rule trait and priority-ordered registry

use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;

use super::rules::{
    CommandLanguageRule, CrossCategoryIdRule, DefaultLocaleRule, IdFormatRule, LocaleParityRule,
    NonEmptyTextRule, SubsectionParityRule, UniqueIdRule,
};
use super::ValidationResult;
use crate::catalog::Catalog;

/// Trait for pluggable catalog checks
pub trait CatalogRule: Send + Sync {
    /// Rule name, shown in reports
    fn name(&self) -> &str;

    /// Check the catalog and report issues
    fn check(&self, catalog: &Catalog) -> ValidationResult;

    /// Get rule priority (lower runs first)
    fn priority(&self) -> u32 {
        100
    }
}

/// Registry for managing catalog rules
#[derive(Default)]
pub struct RuleRegistry {
    rules: Mutex<Vec<Arc<dyn CatalogRule>>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in rule
    ///
    /// # Examples
    ///
    /// ```
    /// use tweak_catalog::catalog::Catalog;
    /// use tweak_catalog::validate::RuleRegistry;
    ///
    /// let registry = RuleRegistry::with_builtin_rules();
    /// let result = registry.run(Catalog::builtin()?);
    /// assert!(result.valid);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_builtin_rules() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(DefaultLocaleRule));
        registry.register(Arc::new(UniqueIdRule));
        registry.register(Arc::new(CrossCategoryIdRule));
        registry.register(Arc::new(LocaleParityRule));
        registry.register(Arc::new(SubsectionParityRule));
        registry.register(Arc::new(IdFormatRule));
        registry.register(Arc::new(CommandLanguageRule));
        registry.register(Arc::new(NonEmptyTextRule));
        registry
    }

    /// Register a rule
    pub fn register(&self, rule: Arc<dyn CatalogRule>) {
        let mut rules = self.rules.lock();
        rules.push(rule);
        // Sort by priority
        rules.sort_by_key(|r| r.priority());
    }

    /// Run all rules
    pub fn run(&self, catalog: &Catalog) -> ValidationResult {
        let rules = self.rules.lock();

        let mut result = ValidationResult::success();

        for rule in rules.iter() {
            let rule_result = rule.check(catalog);
            debug!(
                "Rule '{}' reported {} issue(s)",
                rule.name(),
                rule_result.issues.len()
            );
            result.merge(rule_result);
        }

        result
    }

    /// Names of registered rules, in run order
    pub fn names(&self) -> Vec<String> {
        self.rules.lock().iter().map(|r| r.name().to_string()).collect()
    }

    /// Clear all rules
    pub fn clear(&self) {
        self.rules.lock().clear();
    }

    /// Get rule count
    pub fn count(&self) -> usize {
        self.rules.lock().len()
    }
}
