//! Message directory watcher for dictionary hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::i18n::Catalog;
use crate::observability::metrics;

/// A watcher that monitors the message directory for changes.
pub struct CatalogWatcher {
    dir: PathBuf,
    update_tx: mpsc::UnboundedSender<Catalog>,
}

impl CatalogWatcher {
    /// Create a new CatalogWatcher.
    ///
    /// Returns the watcher and a receiver for reloaded catalogs.
    pub fn new(dir: &Path) -> (Self, mpsc::UnboundedReceiver<Catalog>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                dir: dir.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the directory in a background thread.
    ///
    /// The returned watcher must be kept alive for events to be delivered.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let dir = self.dir.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !(event.kind.is_modify() || event.kind.is_create()) || !touches_dictionary(&event) {
                        return;
                    }
                    tracing::info!("Dictionary change detected, reloading...");
                    match Catalog::load_dir(&dir) {
                        Ok(catalog) => {
                            metrics::record_catalog_reload("success");
                            let _ = tx.send(catalog);
                        }
                        Err(e) => {
                            metrics::record_catalog_reload("error");
                            tracing::error!(error = %e, "Failed to reload dictionaries. Keeping current catalog.");
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.dir, RecursiveMode::NonRecursive)?;

        tracing::info!(dir = ?self.dir, "Dictionary watcher started");
        Ok(watcher)
    }
}

fn touches_dictionary(event: &Event) -> bool {
    event
        .paths
        .iter()
        .any(|p| p.extension().is_some_and(|ext| ext == "json"))
}
