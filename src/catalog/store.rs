//! Read-only catalog store and lookups
//!
//! The catalog is built once and never mutated. Lookups resolve the locale
//! with a two-step fallback chain (requested, then default) and answer from
//! per-partition id indexes built at load time.

use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::error::{CatalogLoadError, NotFoundError};
use super::loader::CatalogLoader;
use super::model::{Category, CategoryMeta, Locale, Tweak};

static BUILTIN: OnceLock<Result<Catalog, CatalogLoadError>> = OnceLock::new();

/// Tweaks of one category, partitioned by locale
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    partitions: BTreeMap<Locale, Partition>,
}

/// Ordered tweaks of one category+locale with an id index
#[derive(Debug, Clone)]
struct Partition {
    tweaks: Vec<Tweak>,
    // First occurrence wins; duplicates are reported by the validator.
    index: HashMap<String, usize>,
}

impl Partition {
    fn new(tweaks: Vec<Tweak>) -> Self {
        let mut index = HashMap::with_capacity(tweaks.len());
        for (position, tweak) in tweaks.iter().enumerate() {
            index.entry(tweak.id.clone()).or_insert(position);
        }
        Self { tweaks, index }
    }

    fn get(&self, id: &str) -> Option<&Tweak> {
        self.index.get(id).and_then(|&i| self.tweaks.get(i))
    }
}

impl CategoryCatalog {
    /// Build from locale partitions, keeping each partition's order
    pub fn new(locales: BTreeMap<Locale, Vec<Tweak>>) -> Self {
        Self {
            partitions: locales
                .into_iter()
                .map(|(locale, tweaks)| (locale, Partition::new(tweaks)))
                .collect(),
        }
    }

    /// Tweaks for an exact locale, without fallback
    pub fn tweaks(&self, locale: &Locale) -> Option<&[Tweak]> {
        self.partitions.get(locale).map(|p| p.tweaks.as_slice())
    }

    /// Locales that have data, sorted by code
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.partitions.keys()
    }
}

/// The tweak catalog
///
/// # Examples
///
/// ```
/// use tweak_catalog::catalog::{Catalog, Category};
///
/// let catalog = Catalog::builtin()?;
/// let tweak = catalog.get_tweak_by_id(Category::FirewallSecurity, "en", "block-smb-port")?;
/// assert!(tweak.subsections[0].command().unwrap().contains("localport=445"));
///
/// // Unsupported locales fall back to English
/// assert_eq!(
///     catalog.get_tweaks(Category::Gpu, "fr")?,
///     catalog.get_tweaks(Category::Gpu, "en")?,
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: BTreeMap<Category, CategoryCatalog>,
    default_locale: Locale,
}

impl Catalog {
    /// Catalog compiled into the binary, parsed on first use
    ///
    /// A parse failure is cached and returned on every call.
    pub fn builtin() -> Result<&'static Catalog, CatalogLoadError> {
        BUILTIN
            .get_or_init(CatalogLoader::load_embedded)
            .as_ref()
            .map_err(|e| e.clone())
    }

    /// Catalog read from a directory of `<category>.json` files
    pub fn load_dir(dir: impl AsRef<std::path::Path>) -> Result<Catalog, CatalogLoadError> {
        CatalogLoader::load_dir(dir.as_ref())
    }

    /// Assemble a catalog from parsed categories, with [`Locale::DEFAULT`] as fallback
    pub fn from_categories(categories: BTreeMap<Category, CategoryCatalog>) -> Self {
        Self {
            categories,
            default_locale: Locale::DEFAULT,
        }
    }

    /// Replace the fallback locale
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// Fallback locale used when the requested one has no data
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Every category, in declared order
    pub fn list_categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Presentation metadata for a category
    pub fn get_category_meta(&self, category: Category) -> CategoryMeta {
        category.meta()
    }

    /// Presentation metadata looked up by category name
    pub fn get_category_meta_str(&self, name: &str) -> Result<CategoryMeta, NotFoundError> {
        name.parse::<Category>().map(|c| c.meta())
    }

    /// Raw data of a category, if the catalog has it
    pub fn category(&self, category: Category) -> Result<&CategoryCatalog, NotFoundError> {
        self.categories
            .get(&category)
            .ok_or_else(|| NotFoundError::Category {
                name: category.as_str().to_string(),
            })
    }

    /// Locales with data for a category
    pub fn locales(&self, category: Category) -> Result<Vec<&Locale>, NotFoundError> {
        Ok(self.category(category)?.locales().collect())
    }

    /// Resolve a requested locale code to the locale that will answer
    ///
    /// Malformed or unsupported codes fall back to the default locale.
    pub fn resolve_locale(&self, category: Category, requested: &str) -> Result<&Locale, NotFoundError> {
        let data = self.category(category)?;

        if let Ok(locale) = Locale::parse(requested) {
            if let Some((found, _)) = data.partitions.get_key_value(&locale) {
                return Ok(found);
            }
        }

        match data.partitions.get_key_value(&self.default_locale) {
            Some((found, _)) => {
                debug!(
                    "No '{}' data for {}, falling back to '{}'",
                    requested, category, found
                );
                Ok(found)
            }
            None => Err(NotFoundError::Locale {
                category,
                requested: requested.to_string(),
                fallback: self.default_locale.clone(),
            }),
        }
    }

    /// Tweaks of a category in declared order, after locale fallback
    pub fn get_tweaks(&self, category: Category, locale: &str) -> Result<&[Tweak], NotFoundError> {
        let resolved = self.resolve_locale(category, locale)?;
        Ok(self.partition(category, resolved)?.tweaks.as_slice())
    }

    /// Single tweak by id, after locale fallback
    pub fn get_tweak_by_id(
        &self,
        category: Category,
        locale: &str,
        id: &str,
    ) -> Result<&Tweak, NotFoundError> {
        let resolved = self.resolve_locale(category, locale)?;
        self.partition(category, resolved)?
            .get(id)
            .ok_or_else(|| NotFoundError::Tweak {
                category,
                locale: resolved.clone(),
                id: id.to_string(),
            })
    }

    /// Every (category, locale, tweaks) partition, categories in declared order
    pub fn partitions(&self) -> impl Iterator<Item = (Category, &Locale, &[Tweak])> {
        self.categories.iter().flat_map(|(category, data)| {
            data.partitions
                .iter()
                .map(move |(locale, p)| (*category, locale, p.tweaks.as_slice()))
        })
    }

    /// Total number of tweaks across every partition
    pub fn len(&self) -> usize {
        self.partitions().map(|(_, _, tweaks)| tweaks.len()).sum()
    }

    /// Whether the catalog holds no tweaks at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn partition(&self, category: Category, locale: &Locale) -> Result<&Partition, NotFoundError> {
        self.category(category)?
            .partitions
            .get(locale)
            .ok_or_else(|| NotFoundError::Locale {
                category,
                requested: locale.to_string(),
                fallback: self.default_locale.clone(),
            })
    }
}
