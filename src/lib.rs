//! Bilingual (Turkish/English) clinic site server.
//!
//! Locale-aware routing over a single Turkish slug scheme, plus a
//! remotely-fetched site configuration cache feeding contact data and
//! theme colors to every page.

pub mod config;
pub mod http;
pub mod i18n;
pub mod lifecycle;
pub mod observability;
pub mod ops;
pub mod routing;
pub mod site_config;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
