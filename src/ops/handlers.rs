use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::server::AppState;
use crate::site_config::{ConfigOrigin, Phase, SiteConfig};

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub provider_instance: u64,
    pub provider_phase: Phase,
    pub theme_revision: u64,
    pub theme_owner: u64,
}

#[derive(Serialize)]
pub struct ConfigSnapshot {
    pub loading: bool,
    pub phase: Phase,
    pub origin: ConfigOrigin,
    pub config: SiteConfig,
}

#[derive(Serialize)]
pub struct RemountResult {
    pub previous_instance: u64,
    pub instance: u64,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let provider = state.inner.provider.current();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        provider_instance: provider.instance(),
        provider_phase: provider.phase(),
        theme_revision: state.inner.provider.theme().revision(),
        theme_owner: state.inner.provider.theme().owner(),
    })
}

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigSnapshot> {
    let snapshot = state.inner.provider.current().state();
    Json(ConfigSnapshot {
        loading: snapshot.loading,
        phase: snapshot.phase,
        origin: snapshot.origin,
        config: SiteConfig::clone(&snapshot.config),
    })
}

pub async fn remount_config(State(state): State<AppState>) -> Json<RemountResult> {
    let previous_instance = state.inner.provider.current().instance();
    let fresh = state.inner.provider.remount();
    Json(RemountResult {
        previous_instance,
        instance: fresh.instance(),
    })
}
