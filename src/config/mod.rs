//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! Message directory change (i18n.watch):
//!     watcher.rs detects change
//!     → Catalog::load_dir
//!     → atomic swap of the shared catalog
//! ```
//!
//! # Design Decisions
//! - Server config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The remote site document is not server config, see `site_config`

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    I18nConfig, ListenerConfig, ObservabilityConfig, OpsConfig, SecurityConfig, ServerConfig,
    SiteSourceConfig, TimeoutConfig,
};
pub use validation::ValidationError;
