//! Locale-aware site URLs
//!
//! The default locale is served from unprefixed paths; every other locale
//! lives under `/{locale}`.
//!
//! # Examples
//!
//! ```
//! use tweak_catalog::catalog::Locale;
//! use tweak_catalog::routing::relative_locale_url;
//!
//! assert_eq!(relative_locale_url(&Locale::EN, "/guias", &Locale::EN), "/guias");
//! assert_eq!(relative_locale_url(&Locale::ES, "/guias", &Locale::EN), "/es/guias");
//! assert_eq!(relative_locale_url(&Locale::ES, "", &Locale::EN), "/es");
//! ```

use crate::catalog::Locale;

/// Page that renders the tweak guides
pub const GUIDES_PATH: &str = "/guias";

/// Path of `path` as seen by visitors of `locale`
///
/// The result always starts with `/` and never contains `//`.
pub fn relative_locale_url(locale: &Locale, path: &str, default_locale: &Locale) -> String {
    let mut joined = String::new();
    if locale != default_locale {
        joined.push('/');
        joined.push_str(locale.as_str());
    }
    joined.push('/');
    joined.push_str(path);

    let mut url = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c == '/' && url.ends_with('/') {
            continue;
        }
        url.push(c);
    }

    if url.len() > 1 && url.ends_with('/') {
        url.pop();
    }
    url
}

/// Absolute URL of `path` for `locale` under `base_url`
///
/// # Examples
///
/// ```
/// use tweak_catalog::catalog::Locale;
/// use tweak_catalog::routing::absolute_locale_url;
///
/// assert_eq!(
///     absolute_locale_url("https://example.com/", &Locale::ES, "software", &Locale::EN),
///     "https://example.com/es/software"
/// );
/// ```
pub fn absolute_locale_url(
    base_url: &str,
    locale: &Locale,
    path: &str,
    default_locale: &Locale,
) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        relative_locale_url(locale, path, default_locale)
    )
}

/// Absolute link to a tweak's anchor on the guides page
///
/// The category is not part of the URL; the `cross-category-id` rule keeps
/// ids unique across categories so anchors never collide.
pub fn tweak_deep_link(base_url: &str, locale: &Locale, default_locale: &Locale, id: &str) -> String {
    format!(
        "{}#{}",
        absolute_locale_url(base_url, locale, GUIDES_PATH, default_locale),
        id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_locale_has_no_prefix() {
        assert_eq!(relative_locale_url(&Locale::EN, "", &Locale::EN), "/");
        assert_eq!(relative_locale_url(&Locale::EN, "software", &Locale::EN), "/software");
    }

    #[test]
    fn test_other_locale_is_prefixed() {
        assert_eq!(relative_locale_url(&Locale::ES, "/descargas", &Locale::EN), "/es/descargas");
        assert_eq!(relative_locale_url(&Locale::ES, "/", &Locale::EN), "/es");
    }

    #[test]
    fn test_configured_default_swaps_prefixes() {
        assert_eq!(relative_locale_url(&Locale::ES, "/guias", &Locale::ES), "/guias");
        assert_eq!(relative_locale_url(&Locale::EN, "/guias", &Locale::ES), "/en/guias");
    }

    #[test]
    fn test_duplicate_slashes_collapse() {
        assert_eq!(relative_locale_url(&Locale::ES, "//a//b/", &Locale::EN), "/es/a/b");
    }

    #[test]
    fn test_absolute_url_trims_base_slash() {
        assert_eq!(
            absolute_locale_url("https://www.codextreme.me", &Locale::EN, "", &Locale::EN),
            "https://www.codextreme.me/"
        );
        assert_eq!(
            absolute_locale_url("https://www.codextreme.me//", &Locale::ES, "/guias", &Locale::EN),
            "https://www.codextreme.me/es/guias"
        );
    }

    #[test]
    fn test_tweak_deep_link_points_at_guides_anchor() {
        let link = tweak_deep_link(
            "https://example.com",
            &Locale::ES,
            &Locale::EN,
            "block-smb-port",
        );
        assert_eq!(link, "https://example.com/es/guias#block-smb-port");
    }

    proptest! {
        /// Property: URLs start with '/' and never contain '//'
        #[test]
        fn prop_relative_url_is_normalised(path in "[a-d/]{0,20}", spanish in any::<bool>()) {
            let locale = if spanish { Locale::ES } else { Locale::EN };
            let url = relative_locale_url(&locale, &path, &Locale::EN);
            prop_assert!(url.starts_with('/'));
            prop_assert!(!url.contains("//"));
            prop_assert_eq!(url.starts_with("/es"), spanish);
        }
    }
}
