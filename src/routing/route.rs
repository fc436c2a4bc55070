//! Logical pages and their canonical paths.
//!
//! # Design Decisions
//! - Canonical slugs are Turkish for every locale; only the `/{locale}`
//!   prefix changes. Slugs are a published contract (external links, SEO),
//!   renaming one is a breaking change
//! - The table is an exhaustive `match`, so an unmapped key cannot compile

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// A logical page, independent of locale and URL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKey {
    Home,
    About,
    Specialties,
    Gallery,
    Videos,
    Contact,
    Faq,
    Blog,
}

impl RouteKey {
    /// Every page in navigation order.
    pub const ALL: [RouteKey; 8] = [
        RouteKey::Home,
        RouteKey::About,
        RouteKey::Specialties,
        RouteKey::Gallery,
        RouteKey::Videos,
        RouteKey::Contact,
        RouteKey::Faq,
        RouteKey::Blog,
    ];

    /// Locale-invariant path suffix. Empty for the home page.
    pub const fn canonical_path(self) -> &'static str {
        match self {
            RouteKey::Home => "",
            RouteKey::About => "/hakkimda",
            RouteKey::Specialties => "/uzmanlik-alanlari",
            RouteKey::Gallery => "/galeri",
            RouteKey::Videos => "/videolar",
            RouteKey::Contact => "/iletisim",
            RouteKey::Faq => "/sikca-sorulan-sorular",
            RouteKey::Blog => "/blog",
        }
    }

    /// Dictionary name used for this page's copy (`pages.<name>.title`).
    pub const fn name(self) -> &'static str {
        match self {
            RouteKey::Home => "home",
            RouteKey::About => "about",
            RouteKey::Specialties => "specialties",
            RouteKey::Gallery => "gallery",
            RouteKey::Videos => "videos",
            RouteKey::Contact => "contact",
            RouteKey::Faq => "faq",
            RouteKey::Blog => "blog",
        }
    }

    /// Reverse lookup of a single slug segment (without the leading `/`).
    pub fn from_slug(slug: &str) -> Option<Self> {
        if slug.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|key| key.canonical_path().strip_prefix('/') == Some(slug))
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concrete URL path for a page in a locale: `/{locale}{canonical_path}`.
pub fn resolve(key: RouteKey, locale: Locale) -> String {
    format!("/{}{}", locale.as_str(), key.canonical_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_suffix_is_locale_invariant() {
        for key in RouteKey::ALL {
            let tr = resolve(key, Locale::Tr);
            let en = resolve(key, Locale::En);

            assert!(tr.starts_with("/tr"));
            assert!(en.starts_with("/en"));
            assert_eq!(&tr["/tr".len()..], key.canonical_path());
            assert_eq!(&en["/en".len()..], key.canonical_path());
        }
    }

    #[test]
    fn test_resolve_examples() {
        assert_eq!(resolve(RouteKey::About, Locale::En), "/en/hakkimda");
        assert_eq!(resolve(RouteKey::Faq, Locale::Tr), "/tr/sikca-sorulan-sorular");
        assert_eq!(resolve(RouteKey::Home, Locale::En), "/en");
    }

    #[test]
    fn test_canonical_paths_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for key in RouteKey::ALL {
            assert!(seen.insert(key.canonical_path()), "duplicate path for {key}");
        }
    }

    #[test]
    fn test_from_slug_round_trips() {
        for key in RouteKey::ALL.into_iter().filter(|k| *k != RouteKey::Home) {
            let slug = &key.canonical_path()[1..];
            assert_eq!(RouteKey::from_slug(slug), Some(key));
        }
        assert_eq!(RouteKey::from_slug(""), None);
        assert_eq!(RouteKey::from_slug("about"), None);
        assert_eq!(RouteKey::from_slug("Hakkimda"), None);
    }
}
