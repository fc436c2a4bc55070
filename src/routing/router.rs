//! Inbound path resolution.
//!
//! # Responsibilities
//! - Split a request path into locale segment and page slug
//! - Decide between serving a page, redirecting to the canonical URL,
//!   the admin hand-off, or an explicit not-found
//!
//! # Design Decisions
//! - Pure function of the path: no config, no I/O
//! - Unknown locale segments never reach a page; they redirect to the
//!   default-locale URL with the same canonical suffix
//! - Explicit `NotFound` (carrying the detected locale) rather than a
//!   silent fallback to the home page

use crate::i18n::Locale;
use crate::routing::route::{resolve, RouteKey};

/// Path segment of the external admin dashboard entry point.
pub const ADMIN_SEGMENT: &str = "admin";

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// Serve `key` in `locale`.
    Page { locale: Locale, key: RouteKey },
    /// Permanent redirect to a canonical, locale-qualified URL.
    Redirect { location: String },
    /// Hand off to the admin dashboard of `locale`.
    Admin { locale: Locale },
    /// No such page; render the not-found page in `locale`.
    NotFound { locale: Locale },
}

impl RouteMatch {
    /// Locale the response is rendered in, if it renders anything.
    pub fn locale(&self) -> Option<Locale> {
        match self {
            RouteMatch::Page { locale, .. }
            | RouteMatch::Admin { locale }
            | RouteMatch::NotFound { locale } => Some(*locale),
            RouteMatch::Redirect { .. } => None,
        }
    }
}

/// Where the bare admin path hands off to.
pub fn admin_dashboard_path(locale: Locale) -> String {
    format!("/{}/{}/dashboard", locale.as_str(), ADMIN_SEGMENT)
}

/// Resolve a request target. The fragment is ignored; a query string is
/// carried over onto redirect locations.
pub fn match_path(target: &str) -> RouteMatch {
    let target = target.split('#').next().unwrap_or_default();
    let (path, query) = target.split_once('?').unwrap_or((target, ""));

    match match_segments(path) {
        RouteMatch::Redirect { location } if !query.is_empty() => RouteMatch::Redirect {
            location: format!("{location}?{query}"),
        },
        matched => matched,
    }
}

fn match_segments(path: &str) -> RouteMatch {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let detected = Locale::detect(path);

    match segments.as_slice() {
        [] => RouteMatch::Redirect {
            location: resolve(RouteKey::Home, Locale::DEFAULT),
        },
        [segment] if *segment == ADMIN_SEGMENT => RouteMatch::Admin { locale: detected },
        [segment] => match (Locale::parse(segment), RouteKey::from_slug(segment)) {
            (Some(locale), _) => RouteMatch::Page {
                locale,
                key: RouteKey::Home,
            },
            // unprefixed slug, e.g. `/hakkimda`
            (None, Some(key)) => RouteMatch::Redirect {
                location: resolve(key, Locale::DEFAULT),
            },
            (None, None) => RouteMatch::NotFound { locale: detected },
        },
        [prefix, slug] => match Locale::parse(prefix) {
            Some(locale) if *slug == ADMIN_SEGMENT => RouteMatch::Admin { locale },
            Some(locale) => match RouteKey::from_slug(slug) {
                Some(key) => RouteMatch::Page { locale, key },
                None => RouteMatch::NotFound { locale },
            },
            // invalid locale segment: coerce to the default, keep the suffix
            None => match RouteKey::from_slug(slug) {
                Some(key) => RouteMatch::Redirect {
                    location: resolve(key, Locale::from_segment(prefix)),
                },
                None => RouteMatch::NotFound { locale: detected },
            },
        },
        _ => RouteMatch::NotFound { locale: detected },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_pages() {
        assert_eq!(
            match_path("/en/hakkimda"),
            RouteMatch::Page { locale: Locale::En, key: RouteKey::About }
        );
        assert_eq!(
            match_path("/tr/sikca-sorulan-sorular/"),
            RouteMatch::Page { locale: Locale::Tr, key: RouteKey::Faq }
        );
        assert_eq!(
            match_path("/en"),
            RouteMatch::Page { locale: Locale::En, key: RouteKey::Home }
        );
    }

    #[test]
    fn test_invalid_locale_keeps_suffix() {
        assert_eq!(
            match_path("/xx/hakkimda"),
            RouteMatch::Redirect { location: "/tr/hakkimda".into() }
        );
        assert_eq!(
            match_path("/EN/iletisim#map"),
            RouteMatch::Redirect { location: "/tr/iletisim".into() }
        );
    }

    #[test]
    fn test_redirects_keep_query_string() {
        assert_eq!(
            match_path("/xx/hakkimda?utm_source=x&utm_medium=y"),
            RouteMatch::Redirect { location: "/tr/hakkimda?utm_source=x&utm_medium=y".into() }
        );
        assert_eq!(
            match_path("/?ref=1#top"),
            RouteMatch::Redirect { location: "/tr?ref=1".into() }
        );
        assert_eq!(
            match_path("/galeri?"),
            RouteMatch::Redirect { location: "/tr/galeri".into() }
        );
        assert_eq!(
            match_path("/en/iletisim?ref=1"),
            RouteMatch::Page { locale: Locale::En, key: RouteKey::Contact }
        );
    }

    #[test]
    fn test_root_and_unprefixed_slugs_redirect() {
        assert_eq!(match_path("/"), RouteMatch::Redirect { location: "/tr".into() });
        assert_eq!(match_path(""), RouteMatch::Redirect { location: "/tr".into() });
        assert_eq!(
            match_path("/galeri"),
            RouteMatch::Redirect { location: "/tr/galeri".into() }
        );
    }

    #[test]
    fn test_admin_entry_point() {
        assert_eq!(match_path("/admin"), RouteMatch::Admin { locale: Locale::Tr });
        assert_eq!(match_path("/admin/"), RouteMatch::Admin { locale: Locale::Tr });
        assert_eq!(match_path("/en/admin"), RouteMatch::Admin { locale: Locale::En });
        assert_eq!(admin_dashboard_path(Locale::En), "/en/admin/dashboard");
    }

    #[test]
    fn test_not_found() {
        assert_eq!(match_path("/en/about"), RouteMatch::NotFound { locale: Locale::En });
        assert_eq!(match_path("/nope"), RouteMatch::NotFound { locale: Locale::Tr });
        assert_eq!(
            match_path("/en/blog/some-post"),
            RouteMatch::NotFound { locale: Locale::En }
        );
        assert_eq!(match_path("/xx/nope"), RouteMatch::NotFound { locale: Locale::Tr });
    }
}
