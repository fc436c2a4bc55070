//! Supported locales and current-locale detection.
//!
//! # Design Decisions
//! - Closed set: anything outside it is coerced to [`Locale::DEFAULT`]
//! - Detection reads only the first path segment, so it never depends on
//!   the page slug and cannot fail

use std::fmt;

use serde::{Deserialize, Serialize};

/// A language served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Turkish (default).
    Tr,
    /// English.
    En,
}

impl Locale {
    /// Locale used when a request carries none or an unknown one.
    pub const DEFAULT: Locale = Locale::Tr;

    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::Tr, Locale::En];

    /// The URL segment and dictionary name for this locale.
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
        }
    }

    /// Value for the `lang` attribute and `hreflang` alternates.
    pub const fn html_lang(self) -> &'static str {
        match self {
            Locale::Tr => "tr-TR",
            Locale::En => "en-US",
        }
    }

    /// Exact match against the locale set. Segments are case-sensitive,
    /// `/EN/...` is not a locale prefix.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "tr" => Some(Locale::Tr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Like [`Locale::parse`], but falls back to the default.
    pub fn from_segment(segment: &str) -> Self {
        Self::parse(segment).unwrap_or(Self::DEFAULT)
    }

    /// Derive the current locale from a URL path.
    ///
    /// Only the first non-empty segment is inspected. Query strings and
    /// fragments are ignored.
    pub fn detect(path: &str) -> Self {
        first_segment(path)
            .map(Self::from_segment)
            .unwrap_or(Self::DEFAULT)
    }

    /// The other locale, used by the language switcher.
    pub const fn alternate(self) -> Self {
        match self {
            Locale::Tr => Locale::En,
            Locale::En => Locale::Tr,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First non-empty path segment, with any query or fragment stripped.
pub(crate) fn first_segment(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').find(|s| !s.is_empty())
}
