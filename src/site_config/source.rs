//! Where a `SiteConfig` comes from.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::site_config::model::SiteConfig;

/// Failure retrieving the remote configuration. Always recovered by the
/// provider; only ever logged.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("endpoint returned {0}")]
    Status(StatusCode),

    #[error("malformed configuration document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Status(_) => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// A source of site configuration documents.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Fetch the full document once.
    async fn fetch(&self) -> Result<SiteConfig, FetchError>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Plain `GET` against the configuration endpoint.
#[derive(Debug, Clone)]
pub struct HttpConfigSource {
    client: Client,
    url: Url,
}

impl HttpConfigSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("clinic-site/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    async fn fetch(&self) -> Result<SiteConfig, FetchError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // bad bodies surface as Decode, not Network
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
