//! Internationalization subsystem.
//!
//! # Data Flow
//! ```text
//! request path
//!     → locale.rs (first segment → Locale, default `tr`)
//!     → catalog.rs (Locale → Translator over that locale's dictionary)
//!     → page renderer (translate("pages.about", "title"))
//! ```

pub mod catalog;
pub mod locale;

pub use catalog::{Catalog, CatalogError, Translator};
pub use locale::Locale;
