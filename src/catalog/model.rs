//! Catalog data model
//!
//! Typed rendition of the catalog schema. The closed sets (categories,
//! impact levels, subsection annotations) are enums; locales are a validated
//! newtype so the catalog can carry any number of languages.
//!
//! The on-disk format is the flat JSON object used by the catalog files.
//! [`Subsection`] converts from that flat shape at the deserialization
//! boundary, so an invalid combination of optional fields never reaches the
//! rest of the crate.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use super::error::{InvalidLocaleCode, NotFoundError, SubsectionError};

/// Topical grouping of tweaks
///
/// Adding a category is a code change: the variant, its metadata in
/// [`Category::meta`] and a `catalog/<category>.json` data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// General TCP/IP stack settings
    Network,
    /// Memory management
    Memory,
    /// Graphics drivers and scheduling
    Gpu,
    /// Optional Windows components
    WindowsFeatures,
    /// Firewall rules and protocol hardening
    FirewallSecurity,
    /// Nagle's algorithm and delayed ACK
    NagleAlgorithm,
    /// Multimedia network throttling
    NetworkThrottling,
    /// Multimedia class scheduler responsiveness
    SystemResponsiveness,
    /// Kernel timers, DPC and interrupt latency
    LatencyTimers,
}

impl Category {
    /// Every category, in declared (navigation) order
    pub const ALL: [Category; 9] = [
        Category::Network,
        Category::Memory,
        Category::Gpu,
        Category::WindowsFeatures,
        Category::FirewallSecurity,
        Category::NagleAlgorithm,
        Category::NetworkThrottling,
        Category::SystemResponsiveness,
        Category::LatencyTimers,
    ];

    /// Stable snake_case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Network => "network",
            Category::Memory => "memory",
            Category::Gpu => "gpu",
            Category::WindowsFeatures => "windows_features",
            Category::FirewallSecurity => "firewall_security",
            Category::NagleAlgorithm => "nagle_algorithm",
            Category::NetworkThrottling => "network_throttling",
            Category::SystemResponsiveness => "system_responsiveness",
            Category::LatencyTimers => "latency_timers",
        }
    }

    /// Icon and color scheme used by presentation code
    ///
    /// # Examples
    ///
    /// ```
    /// use tweak_catalog::catalog::Category;
    ///
    /// let meta = Category::FirewallSecurity.meta();
    /// assert_eq!(meta.icon, "🛡️");
    /// assert_eq!(meta.colors.color, "from-red-400 to-red-600");
    /// ```
    pub const fn meta(&self) -> CategoryMeta {
        let (icon, color, text_color) = match self {
            Category::Network => ("🌐", "from-slate-600 to-slate-800", "from-slate-700 to-slate-900"),
            Category::Memory => ("🧠", "from-purple-400 to-purple-600", "from-purple-500 to-purple-700"),
            Category::Gpu => ("🎮", "from-green-400 to-green-600", "from-green-500 to-green-700"),
            Category::WindowsFeatures => ("⚙️", "from-cyan-400 to-cyan-600", "from-cyan-500 to-cyan-700"),
            Category::FirewallSecurity => ("🛡️", "from-red-400 to-red-600", "from-red-500 to-red-700"),
            Category::NagleAlgorithm => ("🔧", "from-orange-400 to-orange-600", "from-orange-500 to-orange-700"),
            Category::NetworkThrottling => ("📊", "from-pink-400 to-pink-600", "from-pink-500 to-pink-700"),
            Category::SystemResponsiveness => ("⚡", "from-indigo-400 to-indigo-600", "from-indigo-500 to-indigo-700"),
            Category::LatencyTimers => ("⏱️", "from-yellow-400 to-yellow-600", "from-yellow-500 to-yellow-700"),
        };
        CategoryMeta {
            icon,
            colors: ColorScheme { color, text_color },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = NotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| NotFoundError::Category {
                name: s.to_string(),
            })
    }
}

/// Presentation metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryMeta {
    /// Emoji icon
    pub icon: &'static str,
    /// Gradient classes for cards and headings
    pub colors: ColorScheme,
}

/// Background and text gradient classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    /// Background gradient
    pub color: &'static str,
    /// Text gradient
    pub text_color: &'static str,
}

/// Language code of a catalog partition (`en`, `es`, ...)
///
/// Always lowercase ASCII, two or three letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// English
    pub const EN: Locale = Locale(Cow::Borrowed("en"));
    /// Spanish
    pub const ES: Locale = Locale(Cow::Borrowed("es"));
    /// Locale used when the requested one has no data
    pub const DEFAULT: Locale = Locale::EN;

    /// Parse and normalise a language code
    ///
    /// # Examples
    ///
    /// ```
    /// use tweak_catalog::catalog::Locale;
    ///
    /// assert_eq!(Locale::parse("ES").unwrap(), Locale::ES);
    /// assert!(Locale::parse("en-US").is_err());
    /// ```
    pub fn parse(code: &str) -> Result<Self, InvalidLocaleCode> {
        let code = code.trim();
        let well_formed =
            (2..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_alphabetic());
        if !well_formed {
            return Err(InvalidLocaleCode {
                code: code.to_string(),
            });
        }
        Ok(Locale(Cow::Owned(code.to_ascii_lowercase())))
    }

    /// The language code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = InvalidLocaleCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = InvalidLocaleCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0.into_owned()
    }
}

/// Editorial rating of how much a tweak changes the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    /// Minor effect
    Low,
    /// Noticeable effect
    Medium,
    /// Significant effect
    High,
}

impl ImpactLevel {
    /// Lowercase name as stored in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an annotated subsection is flagged when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// Risk the user must read before applying
    Warning,
    /// Side remark
    Note,
    /// Background information
    Info,
}

impl NoteKind {
    /// Lowercase name as stored in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteKind::Warning => "warning",
            NoteKind::Note => "note",
            NoteKind::Info => "info",
        }
    }
}

/// One documented system change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Tweak {
    /// Stable identifier, shared by every locale of the same tweak
    pub id: String,
    /// Display name
    pub name: String,
    /// What the tweak does
    pub description: String,
    /// What the user gains
    pub benefit: String,
    /// Editorial impact rating
    pub impact_level: ImpactLevel,
    /// Instructional steps, in order
    pub subsections: Vec<Subsection>,
}

impl Tweak {
    /// Subsections that carry a command
    pub fn commands(&self) -> impl Iterator<Item = &Subsection> {
        self.subsections.iter().filter(|s| s.command().is_some())
    }

    /// Whether any subsection is flagged as a warning
    pub fn has_warning(&self) -> bool {
        self.subsections
            .iter()
            .any(|s| s.kind() == Some(NoteKind::Warning))
    }
}

/// One unit of explanation or action within a tweak
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSubsection", into = "RawSubsection")]
pub enum Subsection {
    /// Plain explanatory paragraph
    Text {
        /// Heading
        title: String,
        /// Paragraph text
        content: String,
    },
    /// Command meant to be copied and run verbatim
    Command {
        /// Heading
        title: String,
        /// Optional explanation shown above the command
        content: Option<String>,
        /// Literal command text
        command: String,
        /// Script dialect, for syntax highlighting only
        language: Option<String>,
    },
    /// Paragraph flagged as a warning, note or info box
    Annotated {
        /// Heading
        title: String,
        /// Paragraph text
        content: String,
        /// How the paragraph is flagged
        kind: NoteKind,
    },
}

impl Subsection {
    /// Heading of the subsection
    pub fn title(&self) -> &str {
        match self {
            Subsection::Text { title, .. }
            | Subsection::Command { title, .. }
            | Subsection::Annotated { title, .. } => title,
        }
    }

    /// Explanatory text, if any
    pub fn content(&self) -> Option<&str> {
        match self {
            Subsection::Text { content, .. } | Subsection::Annotated { content, .. } => {
                Some(content)
            }
            Subsection::Command { content, .. } => content.as_deref(),
        }
    }

    /// Command text for command blocks
    pub fn command(&self) -> Option<&str> {
        match self {
            Subsection::Command { command, .. } => Some(command),
            _ => None,
        }
    }

    /// Script dialect of the command
    pub fn language(&self) -> Option<&str> {
        match self {
            Subsection::Command { language, .. } => language.as_deref(),
            _ => None,
        }
    }

    /// Annotation kind for annotated paragraphs
    pub fn kind(&self) -> Option<NoteKind> {
        match self {
            Subsection::Annotated { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Flat wire shape of a subsection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSubsection {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<NoteKind>,
}

impl TryFrom<RawSubsection> for Subsection {
    type Error = SubsectionError;

    fn try_from(raw: RawSubsection) -> Result<Self, Self::Error> {
        let RawSubsection {
            title,
            content,
            command,
            language,
            kind,
        } = raw;

        match (command, content, kind) {
            (Some(_), _, Some(kind)) => Err(SubsectionError::AnnotatedCommand { title, kind }),
            (Some(command), content, None) => Ok(Subsection::Command {
                title,
                content: content.filter(|c| !c.trim().is_empty()),
                command,
                language,
            }),
            (None, _, _) if language.is_some() => {
                Err(SubsectionError::LanguageWithoutCommand { title })
            }
            (None, Some(content), Some(kind)) => Ok(Subsection::Annotated {
                title,
                content,
                kind,
            }),
            (None, Some(content), None) => Ok(Subsection::Text { title, content }),
            (None, None, _) => Err(SubsectionError::Empty { title }),
        }
    }
}

impl From<Subsection> for RawSubsection {
    fn from(subsection: Subsection) -> Self {
        match subsection {
            Subsection::Text { title, content } => RawSubsection {
                title,
                content: Some(content),
                command: None,
                language: None,
                kind: None,
            },
            Subsection::Command {
                title,
                content,
                command,
                language,
            } => RawSubsection {
                title,
                content,
                command: Some(command),
                language,
                kind: None,
            },
            Subsection::Annotated {
                title,
                content,
                kind,
            } => RawSubsection {
                title,
                content: Some(content),
                command: None,
                language: None,
                kind: Some(kind),
            },
        }
    }
}
