//! Operator endpoints: provider status, effective config, remount.

pub mod auth;
pub mod handlers;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use self::auth::ops_auth_middleware;
use self::handlers::*;
use crate::http::server::AppState;

pub fn setup_ops_router(state: AppState) -> Router {
    Router::new()
        .route("/ops/status", get(get_status))
        .route("/ops/config", get(get_config))
        .route("/ops/config/remount", post(remount_config))
        .route_layer(middleware::from_fn_with_state(state.clone(), ops_auth_middleware))
        .with_state(state)
}
