//! Configuration schema definitions.
//!
//! This module defines the server's own configuration file. The remote,
//! per-site document (contact details, colors) lives in `site_config`.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Remote site configuration endpoint.
    pub site: SiteSourceConfig,

    /// Message dictionaries.
    pub i18n: I18nConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    pub ops: OpsConfig,

    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Where the site configuration document is fetched from.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteSourceConfig {
    /// `GET` endpoint returning the site configuration JSON.
    /// Without one the built-in default is served.
    pub config_endpoint: Option<String>,

    /// Fetch timeout in seconds.
    pub fetch_timeout_secs: u64,
}

impl Default for SiteSourceConfig {
    fn default() -> Self {
        Self {
            config_endpoint: None,
            fetch_timeout_secs: 10,
        }
    }
}

/// Message dictionary settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct I18nConfig {
    /// Directory holding `tr.json` and `en.json`. Built-in dictionaries are
    /// used when unset.
    pub messages_dir: Option<String>,

    /// Reload dictionaries when files in `messages_dir` change.
    pub watch: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Operator endpoints (`/ops/*`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OpsConfig {
    /// Enable operator endpoints.
    pub enabled: bool,

    /// API key for authentication (Bearer token).
    pub api_key: String,
}

pub(crate) const PLACEHOLDER_API_KEY: &str = "CHANGE_ME_IN_PRODUCTION";

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: PLACEHOLDER_API_KEY.to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
        }
    }
}
