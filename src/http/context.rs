//! Request-scoped page context.
//!
//! Everything a page renderer may read is threaded through here: the
//! resolved locale, the translator for that locale, and a snapshot of the
//! site configuration and theme taken once at the start of the request.

use std::sync::Arc;

use crate::i18n::{Catalog, Locale, Translator};
use crate::routing::{resolve, RouteKey};
use crate::site_config::{ProviderSlot, SiteConfig};

pub struct PageContext<'a> {
    pub locale: Locale,
    /// `None` for the not-found page.
    pub route: Option<RouteKey>,
    pub translator: Translator<'a>,
    pub config: Arc<SiteConfig>,
    /// `:root { ... }` theme rule.
    pub theme_css: String,
}

impl<'a> PageContext<'a> {
    pub fn new(
        locale: Locale,
        route: Option<RouteKey>,
        catalog: &'a Catalog,
        provider: &ProviderSlot,
    ) -> Self {
        Self {
            locale,
            route,
            translator: catalog.translator(locale),
            config: provider.current().config(),
            theme_css: provider.theme().css(),
        }
    }

    /// `translate(namespace, key)` in this page's locale.
    pub fn t(&self, namespace: &str, key: &str) -> String {
        self.translator.translate(Some(namespace), key)
    }

    /// Link to `key` in the current locale.
    pub fn link(&self, key: RouteKey) -> String {
        resolve(key, self.locale)
    }

    /// The same page in another locale; home for the not-found page.
    pub fn link_in(&self, locale: Locale) -> String {
        resolve(self.route.unwrap_or(RouteKey::Home), locale)
    }
}
