//! Message dictionaries and text lookup.
//!
//! # Responsibilities
//! - Load one nested JSON dictionary per locale
//! - Resolve dotted key paths (`faq.title`) against the active dictionary
//! - Fall back to the key path itself when a translation is missing
//!
//! # Design Decisions
//! - Dictionaries are immutable once loaded; a reload builds a new `Catalog`
//! - Lookup never fails, a missing entry renders as its key path so gaps are
//!   visible on the page instead of breaking it

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::i18n::Locale;

const BUILTIN_TR: &str = include_str!("../../locales/tr.json");
const BUILTIN_EN: &str = include_str!("../../locales/en.json");

/// Error loading a dictionary from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {locale} dictionary: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("{locale} dictionary must be a JSON object")]
    NotAnObject { locale: Locale },
}

/// All dictionaries, keyed by locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    dictionaries: HashMap<Locale, Value>,
}

impl Catalog {
    /// Dictionaries compiled into the binary.
    pub fn builtin() -> Self {
        let mut dictionaries = HashMap::new();
        for (locale, raw) in [(Locale::Tr, BUILTIN_TR), (Locale::En, BUILTIN_EN)] {
            // bundled files are covered by tests
            let dict = parse_dictionary(locale, raw).unwrap_or_else(|e| {
                tracing::error!(error = %e, "Built-in dictionary is invalid");
                Value::Object(Default::default())
            });
            dictionaries.insert(locale, dict);
        }
        Self { dictionaries }
    }

    /// Load `<dir>/<locale>.json` for every supported locale.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut dictionaries = HashMap::new();
        for locale in Locale::ALL {
            let path = dir.join(format!("{}.json", locale.as_str()));
            let raw = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            dictionaries.insert(locale, parse_dictionary(locale, &raw)?);
        }
        tracing::info!(dir = %dir.display(), "Loaded message dictionaries");
        Ok(Self { dictionaries })
    }

    /// Build a catalog from in-memory trees. Missing locales get an empty
    /// dictionary.
    pub fn from_values(values: impl IntoIterator<Item = (Locale, Value)>) -> Self {
        let mut dictionaries: HashMap<Locale, Value> = values.into_iter().collect();
        for locale in Locale::ALL {
            dictionaries
                .entry(locale)
                .or_insert_with(|| Value::Object(Default::default()));
        }
        Self { dictionaries }
    }

    /// A translator bound to one locale.
    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator {
            locale,
            dictionary: self.dictionaries.get(&locale),
        }
    }
}

fn parse_dictionary(locale: Locale, raw: &str) -> Result<Value, CatalogError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| CatalogError::Parse { locale, source })?;
    if !value.is_object() {
        return Err(CatalogError::NotAnObject { locale });
    }
    Ok(value)
}

/// Text lookup for a single locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    locale: Locale,
    dictionary: Option<&'a Value>,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up `namespace.key` (or just `key`). Both parts may themselves be
    /// dotted. Returns the joined key path when any segment is missing or the
    /// leaf is not a string.
    pub fn translate(&self, namespace: Option<&str>, key: &str) -> String {
        let full_key = match namespace {
            Some(ns) if !ns.is_empty() => format!("{ns}.{key}"),
            _ => key.to_string(),
        };

        match self.lookup(&full_key) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(locale = %self.locale, key = %full_key, "Missing translation");
                full_key
            }
        }
    }

    /// Shorthand for `translate(None, key)`.
    pub fn t(&self, key: &str) -> String {
        self.translate(None, key)
    }

    fn lookup(&self, path: &str) -> Option<&'a str> {
        let mut node = self.dictionary?;
        for segment in path.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::from_values([
            (
                Locale::Tr,
                json!({
                    "faq": { "title": "Sıkça Sorulan Sorular", "items": ["a"] },
                    "nav": { "home": "Ana Sayfa" }
                }),
            ),
            (Locale::En, json!({ "nav": { "home": "Home" } })),
        ])
    }

    #[test]
    fn test_translate_resolves_nested_key() {
        let catalog = catalog();
        let tr = catalog.translator(Locale::Tr);
        assert_eq!(tr.translate(Some("faq"), "title"), "Sıkça Sorulan Sorular");
        assert_eq!(tr.t("nav.home"), "Ana Sayfa");
        assert_eq!(catalog.translator(Locale::En).t("nav.home"), "Home");
    }

    #[test]
    fn test_missing_key_returns_key_path() {
        let catalog = catalog();
        let en = catalog.translator(Locale::En);
        assert_eq!(en.translate(Some("faq"), "title"), "faq.title");
        assert_eq!(en.t("nav.home.deeper"), "nav.home.deeper");
        assert_eq!(en.translate(Some(""), "nav.missing"), "nav.missing");
    }

    #[test]
    fn test_non_string_leaf_returns_key_path() {
        let catalog = catalog();
        let tr = catalog.translator(Locale::Tr);
        assert_eq!(tr.t("faq"), "faq");
        assert_eq!(tr.translate(Some("faq"), "items"), "faq.items");
    }

    #[test]
    fn test_builtin_dictionaries_cover_navigation() {
        let catalog = Catalog::builtin();
        for locale in Locale::ALL {
            let t = catalog.translator(locale);
            for key in ["home", "about", "specialties", "gallery", "videos", "contact", "faq", "blog"] {
                let full = format!("nav.{key}");
                assert_ne!(t.t(&full), full, "{locale} is missing {full}");
            }
        }
    }

    #[test]
    fn test_load_dir_rejects_non_object() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("tr.json"), r#"{"nav":{"home":"Ana Sayfa"}}"#).unwrap();
        fs::write(dir.join("en.json"), r#"["not", "an", "object"]"#).unwrap();

        let err = Catalog::load_dir(dir).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject { locale: Locale::En }));

        fs::write(dir.join("en.json"), r#"{"nav":{"home":"Home"}}"#).unwrap();
        let catalog = Catalog::load_dir(dir).unwrap();
        assert_eq!(catalog.translator(Locale::En).t("nav.home"), "Home");
    }

    #[test]
    fn test_load_dir_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("tr.json"), r#"{}"#).unwrap();

        let err = Catalog::load_dir(tmp.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { ref path, .. } if path.ends_with("en.json")));
    }
}
