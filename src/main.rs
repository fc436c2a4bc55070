//! Clinic site server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::match_path ──▶ Page / Redirect / 404
//!                                                                │
//!                            ┌───────────────────────────────────┤
//!                            ▼                                   ▼
//!                     i18n::Catalog                    site_config::ProviderSlot
//!                 (locale → Translator)          (Arc<SiteConfig> + ThemeSheet)
//!                                                                ▲
//!                                                                │ one GET per
//!                                                                │ provider instance
//!                                                        remote config endpoint
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use clinic_site::config::{load_config, ServerConfig};
use clinic_site::lifecycle::{init_subsystems, wait_for_shutdown, Shutdown};
use clinic_site::observability::{logging, metrics};
use clinic_site::HttpServer;

#[derive(Parser)]
#[command(name = "clinic-site")]
#[command(about = "Bilingual clinic site server", long_about = None)]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("clinic-site v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        config_endpoint = ?config.site.config_endpoint,
        messages_dir = ?config.i18n.messages_dir,
        ops_enabled = config.ops.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let subsystems = init_subsystems(&config)?;
    // dropping the watcher stops dictionary reloads
    let _watcher = subsystems.watcher;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_shutdown().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, subsystems.catalog, subsystems.provider);
    server
        .run(listener, subsystems.catalog_updates, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
