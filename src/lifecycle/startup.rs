//! Startup orchestration.
//!
//! # Responsibilities
//! - Load dictionaries (built-in or from `i18n.messages_dir`)
//! - Build the configuration source and mount the first provider
//! - Start the dictionary watcher when requested
//!
//! # Design Decisions
//! - Fail fast: a bad dictionary directory or endpoint is fatal at startup
//! - The provider is mounted before the listener binds, so the fetch is
//!   already in flight when the first request arrives

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use notify::RecommendedWatcher;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::config::validation::{parse_endpoint, ValidationError};
use crate::config::watcher::CatalogWatcher;
use crate::config::ServerConfig;
use crate::i18n::{Catalog, CatalogError};
use crate::site_config::{ConfigSource, FetchError, HttpConfigSource, ProviderSlot, ThemeSheet};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("dictionaries: {0}")]
    Catalog(#[from] CatalogError),

    #[error("configuration endpoint: {0}")]
    Endpoint(#[from] ValidationError),

    #[error("configuration client: {0}")]
    Client(#[from] FetchError),

    #[error("dictionary watcher: {0}")]
    Watcher(#[from] notify::Error),
}

/// Subsystems built from the server config, ready to hand to `HttpServer`.
pub struct Subsystems {
    pub catalog: Catalog,
    pub provider: ProviderSlot,
    pub catalog_updates: mpsc::UnboundedReceiver<Catalog>,
    /// Keeps the dictionary watcher alive; `None` when not watching.
    pub watcher: Option<RecommendedWatcher>,
}

pub fn init_subsystems(config: &ServerConfig) -> Result<Subsystems, StartupError> {
    let catalog = match &config.i18n.messages_dir {
        Some(dir) => Catalog::load_dir(Path::new(dir))?,
        None => Catalog::builtin(),
    };

    let source = config_source(config)?;
    match &source {
        Some(source) => tracing::info!(endpoint = %source.describe(), "Mounting configuration provider"),
        None => tracing::info!("No configuration endpoint, serving built-in site configuration"),
    }
    let provider = ProviderSlot::mount(source, Arc::new(ThemeSheet::new()));

    let (catalog_updates, watcher) = match (&config.i18n.messages_dir, config.i18n.watch) {
        (Some(dir), true) => {
            let (watcher, updates) = CatalogWatcher::new(Path::new(dir));
            (updates, Some(watcher.run()?))
        }
        (None, true) => {
            tracing::warn!("i18n.watch is set without i18n.messages_dir; nothing to watch");
            (mpsc::unbounded_channel().1, None)
        }
        _ => (mpsc::unbounded_channel().1, None),
    };

    Ok(Subsystems {
        catalog,
        provider,
        catalog_updates,
        watcher,
    })
}

fn config_source(config: &ServerConfig) -> Result<Option<Arc<dyn ConfigSource>>, StartupError> {
    let Some(endpoint) = &config.site.config_endpoint else {
        return Ok(None);
    };
    let url = parse_endpoint(endpoint)?;
    let timeout = Duration::from_secs(config.site.fetch_timeout_secs);
    let source: Arc<dyn ConfigSource> = Arc::new(HttpConfigSource::new(url, timeout)?);
    Ok(Some(source))
}
