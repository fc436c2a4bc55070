//! Site configuration subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → ProviderSlot::mount (default config effective, theme applied)
//!     → source.rs fetch (one GET per provider instance)
//!     → provider.rs settle (atomic swap to fetched config, or keep default)
//!     → theme.rs apply (colors → CSS variables)
//!
//! page render
//!     → ProviderSlot::current().config()   (Arc snapshot, never blocks)
//! ```

pub mod model;
pub mod provider;
pub mod source;
pub mod theme;

pub use model::{ColorConfig, ContactConfig, MetaConfig, SiteConfig};
pub use provider::{ConfigCacheState, ConfigOrigin, ConfigProvider, Phase, ProviderSlot};
pub use source::{ConfigSource, FetchError, HttpConfigSource};
pub use theme::ThemeSheet;
