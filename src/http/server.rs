//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, security headers)
//! - Apply reloaded dictionaries while serving
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::handlers::{health, site_handler};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::i18n::Catalog;
use crate::ops::setup_ops_router;
use crate::site_config::ProviderSlot;

/// Everything handlers share for the lifetime of the server.
pub struct SiteState {
    pub config: ServerConfig,
    pub catalog: ArcSwap<Catalog>,
    pub provider: ProviderSlot,
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<SiteState>,
}

/// HTTP server for the clinic site.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server around an already mounted provider.
    pub fn new(config: ServerConfig, catalog: Catalog, provider: ProviderSlot) -> Self {
        let state = AppState {
            inner: Arc::new(SiteState {
                config,
                catalog: ArcSwap::from_pointee(catalog),
                provider,
            }),
        };
        let router = Self::build_router(state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(state: AppState) -> Router {
        let config = &state.inner.config;

        let mut router = Router::new()
            .route("/health", get(health))
            .fallback(site_handler)
            .with_state(state.clone());

        if config.ops.enabled {
            router = router.merge(setup_ops_router(state.clone()));
        }

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ));
        }

        router
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The router, for driving requests without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut catalog_updates: mpsc::UnboundedReceiver<Catalog>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let inner = Arc::clone(&self.state.inner);
        tokio::spawn(async move {
            while let Some(catalog) = catalog_updates.recv().await {
                inner.catalog.store(Arc::new(catalog));
                tracing::info!("Dictionaries swapped");
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        self.state.inner.provider.dispose();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
