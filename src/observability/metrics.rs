//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): page responses by locale, route, status
//! - `site_request_duration_seconds` (histogram): render latency
//! - `site_config_fetch_total` (counter): remote config fetches by outcome
//! - `site_catalog_reloads_total` (counter): dictionary reloads by outcome
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(locale: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "site_requests_total",
        "locale" => locale.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("site_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_config_fetch(outcome: &'static str) {
    counter!("site_config_fetch_total", "outcome" => outcome).increment(1);
}

pub fn record_catalog_reload(outcome: &'static str) {
    counter!("site_catalog_reloads_total", "outcome" => outcome).increment(1);
}
