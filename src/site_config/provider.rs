//! Configuration provider: one fetch per instance, default until then.
//!
//! # Lifecycle
//! ```text
//! Uninitialized ──mount──▶ Loading ──fetch ok───▶ Ready (fetched config)
//!                             │
//!                             └──fetch failed──▶ Ready (default kept)
//!
//! any phase ──dispose──▶ Disposed   (late fetch results are dropped)
//! ```
//!
//! # Design Decisions
//! - State is a single `ArcSwap` cell; every transition replaces the whole
//!   `ConfigCacheState`, so readers never see a half-applied config
//! - Transitions are phase-checked inside `rcu`, which makes "apply only
//!   while Loading" atomic with respect to `dispose`
//! - The fetch task holds a `Weak` reference; a dropped provider is never
//!   kept alive by its own fetch
//! - `Ready` is terminal. Fetching again means mounting a new instance
//! - Every mount claims the shared `ThemeSheet`, so a superseded instance
//!   that settles late cannot repaint the theme

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use arc_swap::ArcSwap;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::observability::metrics;
use crate::site_config::model::SiteConfig;
use crate::site_config::source::{ConfigSource, FetchError};
use crate::site_config::theme::ThemeSheet;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Provider lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Uninitialized,
    Loading,
    Ready,
    Disposed,
}

/// Where the effective config came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Default,
    Remote,
}

/// Snapshot of the provider's cache.
#[derive(Debug, Clone)]
pub struct ConfigCacheState {
    pub config: Arc<SiteConfig>,
    pub loading: bool,
    pub phase: Phase,
    pub origin: ConfigOrigin,
}

impl ConfigCacheState {
    fn initial(config: Arc<SiteConfig>) -> Self {
        Self {
            config,
            loading: false,
            phase: Phase::Uninitialized,
            origin: ConfigOrigin::Default,
        }
    }

    fn with_phase(&self, phase: Phase) -> Self {
        Self {
            config: Arc::clone(&self.config),
            loading: phase == Phase::Loading,
            phase,
            origin: self.origin,
        }
    }
}

/// Owner of the site configuration cache for one mount.
pub struct ConfigProvider {
    instance: u64,
    state: ArcSwap<ConfigCacheState>,
    phase_tx: watch::Sender<Phase>,
    theme: Arc<ThemeSheet>,
}

impl ConfigProvider {
    /// A new, unmounted provider holding the default config.
    pub fn new(theme: Arc<ThemeSheet>) -> Arc<Self> {
        let (phase_tx, _) = watch::channel(Phase::Uninitialized);
        Arc::new(Self {
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            state: ArcSwap::from_pointee(ConfigCacheState::initial(Arc::new(SiteConfig::default()))),
            phase_tx,
            theme,
        })
    }

    /// Move to `Loading` and start the single fetch for this instance.
    ///
    /// With no source the provider settles on the default immediately.
    /// Returns `None` if the provider was already mounted or disposed;
    /// otherwise a handle resolving to whether the fetch result was applied.
    pub fn mount(self: &Arc<Self>, source: Option<Arc<dyn ConfigSource>>) -> Option<JoinHandle<bool>> {
        let prev = self.state.rcu(|cur| {
            if cur.phase == Phase::Uninitialized {
                Arc::new(cur.with_phase(Phase::Loading))
            } else {
                Arc::clone(cur)
            }
        });
        if prev.phase != Phase::Uninitialized {
            tracing::debug!(instance = self.instance, phase = ?prev.phase, "Provider already mounted");
            return None;
        }
        self.phase_tx.send_replace(Phase::Loading);
        // the default is now effective
        self.theme.claim(self.instance, &self.config().colors);

        let weak: Weak<Self> = Arc::downgrade(self);
        let instance = self.instance;
        let handle = tokio::spawn(async move {
            let result = match source {
                Some(source) => {
                    tracing::debug!(instance, source = %source.describe(), "Fetching site configuration");
                    Some(source.fetch().await)
                }
                None => None,
            };
            match weak.upgrade() {
                Some(provider) => provider.settle(result),
                None => {
                    tracing::debug!(instance, "Provider dropped before fetch completed");
                    false
                }
            }
        });
        Some(handle)
    }

    /// Apply the fetch outcome if still `Loading`. Returns `true` if applied.
    fn settle(&self, result: Option<Result<SiteConfig, FetchError>>) -> bool {
        let fetched = match result {
            Some(Ok(config)) => Some(Arc::new(config)),
            Some(Err(e)) => {
                tracing::warn!(
                    instance = self.instance,
                    error = %e,
                    "Site configuration fetch failed, keeping default"
                );
                metrics::record_config_fetch(e.kind());
                None
            }
            None => {
                tracing::info!(instance = self.instance, "No configuration endpoint, using default");
                None
            }
        };

        let prev = self.state.rcu(|cur| {
            if cur.phase != Phase::Loading {
                return Arc::clone(cur);
            }
            let mut next = cur.with_phase(Phase::Ready);
            if let Some(config) = &fetched {
                next.config = Arc::clone(config);
                next.origin = ConfigOrigin::Remote;
            }
            Arc::new(next)
        });
        if prev.phase != Phase::Loading {
            tracing::debug!(instance = self.instance, phase = ?prev.phase, "Discarding late configuration result");
            return false;
        }

        if let Some(config) = &fetched {
            metrics::record_config_fetch("success");
            self.theme.apply(self.instance, &config.colors);
            tracing::info!(instance = self.instance, title = %config.meta.title, "Site configuration loaded");
        }
        self.phase_tx.send_replace(Phase::Ready);
        true
    }

    /// Tear down. Any in-flight fetch result will be discarded.
    pub fn dispose(&self) {
        let prev = self.state.rcu(|cur| {
            if cur.phase == Phase::Disposed {
                Arc::clone(cur)
            } else {
                Arc::new(cur.with_phase(Phase::Disposed))
            }
        });
        if prev.phase != Phase::Disposed {
            tracing::debug!(instance = self.instance, "Provider disposed");
            self.phase_tx.send_replace(Phase::Disposed);
        }
    }

    /// Current config (cache only, never waits).
    pub fn config(&self) -> Arc<SiteConfig> {
        Arc::clone(&self.state.load().config)
    }

    /// Full cache snapshot.
    pub fn state(&self) -> Arc<ConfigCacheState> {
        self.state.load_full()
    }

    pub fn phase(&self) -> Phase {
        self.state.load().phase
    }

    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Wait until the provider is `Ready` or `Disposed`.
    pub async fn ready(&self) -> Phase {
        let mut rx = self.phase_tx.subscribe();
        let phase = match rx
            .wait_for(|phase| matches!(phase, Phase::Ready | Phase::Disposed))
            .await
        {
            Ok(phase) => *phase,
            Err(_) => self.phase(),
        };
        phase
    }
}

/// The currently mounted provider plus what is needed to mount a fresh one.
pub struct ProviderSlot {
    current: ArcSwap<ConfigProvider>,
    source: Option<Arc<dyn ConfigSource>>,
    theme: Arc<ThemeSheet>,
    // theme claims must follow the order providers become current
    remount_lock: Mutex<()>,
}

impl ProviderSlot {
    /// Create and mount the first provider.
    pub fn mount(source: Option<Arc<dyn ConfigSource>>, theme: Arc<ThemeSheet>) -> Self {
        let provider = ConfigProvider::new(Arc::clone(&theme));
        provider.mount(source.clone());
        Self {
            current: ArcSwap::new(provider),
            source,
            theme,
            remount_lock: Mutex::new(()),
        }
    }

    /// Provider serving requests right now.
    pub fn current(&self) -> Arc<ConfigProvider> {
        self.current.load_full()
    }

    pub fn theme(&self) -> &Arc<ThemeSheet> {
        &self.theme
    }

    /// Mount a fresh provider (and with it a fresh fetch), then dispose the
    /// old one. Returns the new provider.
    pub fn remount(&self) -> Arc<ConfigProvider> {
        let _guard = self.remount_lock.lock().expect("provider slot mutex poisoned");
        let fresh = ConfigProvider::new(Arc::clone(&self.theme));
        fresh.mount(self.source.clone());
        let old = self.current.swap(Arc::clone(&fresh));
        old.dispose();
        tracing::info!(old = old.instance(), new = fresh.instance(), "Configuration provider remounted");
        fresh
    }

    /// Dispose the current provider (shutdown).
    pub fn dispose(&self) {
        self.current.load().dispose();
    }
}
