//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the site configuration endpoint is a usable URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{ServerConfig, PLACEHOLDER_API_KEY};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("site.config_endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("ops.api_key: must be set when ops endpoints are enabled")]
    WeakApiKey,
}

/// Check `config` and collect every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(
        &mut errors,
        "listener.bind_address",
        &config.listener.bind_address,
    );
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "timeouts.request_secs",
        });
    }
    if config.site.fetch_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "site.fetch_timeout_secs",
        });
    }

    if let Some(endpoint) = &config.site.config_endpoint {
        if let Err(e) = parse_endpoint(endpoint) {
            errors.push(e);
        }
    }

    if config.ops.enabled {
        let key = config.ops.api_key.trim();
        if key.is_empty() || key == PLACEHOLDER_API_KEY {
            errors.push(ValidationError::WeakApiKey);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse the configuration endpoint, accepting only `http` and `https`.
pub fn parse_endpoint(raw: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(raw).map_err(|e| ValidationError::InvalidEndpoint(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::InvalidEndpoint(format!(
            "unsupported scheme {other:?}"
        ))),
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.site.config_endpoint = Some("ftp://example.com/config.json".into());
        config.ops.enabled = true;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::WeakApiKey));
        assert!(errors.contains(&ValidationError::ZeroTimeout {
            field: "timeouts.request_secs"
        }));
    }

    #[test]
    fn test_endpoint_parsing() {
        assert!(parse_endpoint("https://cms.example.com/api/settings").is_ok());
        assert!(parse_endpoint("http://127.0.0.1:4000/config").is_ok());
        assert!(parse_endpoint("/relative").is_err());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServerConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
