//! Sitemap XML generation
//!
//! Renders a fixed list of site paths into a sitemaps.org `urlset`. The
//! root path gets priority `1.0`, every other path `0.8`, and each entry is
//! stamped with the generation date.
//!
//! # Examples
//!
//! ```
//! use tweak_catalog::sitemap::{CivilDate, Sitemap};
//!
//! let sitemap = Sitemap::new("https://example.com", vec!["".into(), "/a".into()]);
//! let xml = sitemap.render(CivilDate::new(2025, 1, 31));
//!
//! assert_eq!(xml.matches("<url>").count(), 2);
//! assert!(xml.contains("<loc>https://example.com/a</loc>"));
//! assert!(xml.contains("<lastmod>2025-01-31</lastmod>"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Site the sitemap describes by default
pub const DEFAULT_BASE_URL: &str = "https://www.codextreme.me";

/// Change frequency advertised for every entry by default
pub const DEFAULT_CHANGEFREQ: &str = "weekly";

/// Values allowed in `<changefreq>` by the sitemaps.org protocol
pub const CHANGEFREQ_VALUES: [&str; 7] = [
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

/// Content type served with the sitemap body
pub const CONTENT_TYPE: &str = "application/xml";

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Pages listed by default, in both site languages
pub fn default_pages() -> Vec<String> {
    [
        "",
        "/software",
        "/descargas",
        "/guias",
        "/herramientas",
        "/es",
        "/es/software",
        "/es/descargas",
        "/es/guias",
        "/es/herramientas",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

/// Error parsing a `YYYY-MM-DD` date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date '{input}': expected YYYY-MM-DD")]
pub struct DateParseError {
    /// Rejected input
    pub input: String,
}

/// Calendar date (proleptic Gregorian, UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilDate {
    /// Year
    pub year: i64,
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
}

impl CivilDate {
    /// Create a date from its components
    pub const fn new(year: i64, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Today's date in UTC
    ///
    /// A clock set before the Unix epoch yields 1970-01-01.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_days((secs / 86_400) as i64)
    }

    /// Date for a count of days since 1970-01-01
    ///
    /// Exact conversion through 400-year eras, leap years included.
    pub fn from_unix_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097); // [0, 146096]
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
        let mp = (5 * doy + 2) / 153; // [0, 11], March-based
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
        let year = yoe + era * 400 + i64::from(month <= 2);
        Self { year, month, day }
    }

    fn days_in_month(year: i64, month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DateParseError {
            input: s.to_string(),
        };
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(err());
        }
        let year: i64 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        let day: u32 = d.parse().map_err(|_| err())?;
        if day == 0 || day > Self::days_in_month(year, month) {
            return Err(err());
        }
        Ok(Self { year, month, day })
    }
}

/// One `<url>` element
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Absolute URL
    pub loc: String,
    /// Last modification date
    pub lastmod: String,
    /// Change frequency hint
    pub changefreq: String,
    /// Relative priority, `1.0` or `0.8`
    pub priority: &'static str,
}

/// HTTP-level answer for a sitemap request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapResponse {
    /// Always [`CONTENT_TYPE`]
    pub content_type: &'static str,
    /// XML document
    pub body: String,
}

/// Sitemap generator over a fixed page list
#[derive(Debug, Clone)]
pub struct Sitemap {
    base_url: String,
    pages: Vec<String>,
    changefreq: String,
}

impl Default for Sitemap {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, default_pages())
    }
}

impl Sitemap {
    /// Sitemap for `pages` under `base_url`
    ///
    /// Paths are appended to the base URL verbatim; the empty path is the root.
    pub fn new(base_url: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            base_url: base_url.into(),
            pages,
            changefreq: DEFAULT_CHANGEFREQ.to_string(),
        }
    }

    /// Override the change frequency hint
    pub fn with_changefreq(mut self, changefreq: impl Into<String>) -> Self {
        self.changefreq = changefreq.into();
        self
    }

    /// Pages in output order
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Entries in page order
    pub fn entries(&self, date: CivilDate) -> Vec<SitemapEntry> {
        let lastmod = date.to_string();
        self.pages
            .iter()
            .map(|page| SitemapEntry {
                loc: format!("{}{}", self.base_url, page),
                lastmod: lastmod.clone(),
                changefreq: self.changefreq.clone(),
                priority: if page.is_empty() { "1.0" } else { "0.8" },
            })
            .collect()
    }

    /// XML document for the given date
    pub fn render(&self, date: CivilDate) -> String {
        let urls: Vec<String> = self
            .entries(date)
            .iter()
            .map(|entry| {
                format!(
                    "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
                    xml_escape(&entry.loc),
                    entry.lastmod,
                    xml_escape(&entry.changefreq),
                    entry.priority
                )
            })
            .collect();

        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{}\">\n{}\n</urlset>",
            SITEMAP_NAMESPACE,
            urls.join("\n")
        )
    }

    /// XML document stamped with today's date
    pub fn render_today(&self) -> String {
        self.render(CivilDate::today())
    }

    /// Response for a sitemap GET request
    pub fn respond(&self) -> SitemapResponse {
        SitemapResponse {
            content_type: CONTENT_TYPE,
            body: self.render_today(),
        }
    }
}

/// Escape text for use inside an XML element
pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
