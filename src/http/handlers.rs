//! Site request handlers.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::http::context::PageContext;
use crate::http::render::render_page;
use crate::http::request::request_id_of;
use crate::http::server::AppState;
use crate::i18n::Locale;
use crate::observability::metrics;
use crate::routing::{admin_dashboard_path, match_path, RouteMatch};

/// Catch-all page handler: resolves locale and page from the path.
pub async fn site_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();

    let request_id = request_id_of(&request);
    let path = request.uri().path();

    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return reject_method(request_id, request.method(), path, start);
    }

    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or(path);
    let matched = match_path(target);

    tracing::debug!(request_id = %request_id, path = %path, matched = ?matched, "Resolved route");
    let locale_label = matched.locale().map(|l| l.as_str()).unwrap_or("none");

    let (response, route_label) = match matched {
        RouteMatch::Page { locale, key } => {
            let catalog = state.inner.catalog.load();
            let ctx = PageContext::new(locale, Some(key), &catalog, &state.inner.provider);
            (Html(render_page(&ctx)).into_response(), key.name())
        }
        RouteMatch::Redirect { location } => (Redirect::permanent(&location).into_response(), "redirect"),
        RouteMatch::Admin { locale } => (
            Redirect::temporary(&admin_dashboard_path(locale)).into_response(),
            "admin",
        ),
        RouteMatch::NotFound { locale } => {
            tracing::debug!(request_id = %request_id, path = %path, "No page matched");
            let catalog = state.inner.catalog.load();
            let ctx = PageContext::new(locale, None, &catalog, &state.inner.provider);
            (
                (StatusCode::NOT_FOUND, Html(render_page(&ctx))).into_response(),
                "not_found",
            )
        }
    };

    metrics::record_request(locale_label, route_label, response.status().as_u16(), start);
    response
}

fn reject_method(request_id: &str, method: &Method, path: &str, start: Instant) -> Response {
    tracing::debug!(request_id = %request_id, path = %path, method = %method, "Method not allowed");
    let response = StatusCode::METHOD_NOT_ALLOWED.into_response();
    metrics::record_request(
        Locale::detect(path).as_str(),
        "method_not_allowed",
        response.status().as_u16(),
        start,
    );
    response
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_rejected_methods_are_counted() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        let response = ::metrics::with_local_recorder(&recorder, || {
            reject_method("req-1", &Method::POST, "/en/iletisim", Instant::now())
        });

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let rendered = handle.render();
        assert!(rendered.contains("site_requests_total"));
        assert!(rendered.contains("route=\"method_not_allowed\""));
        assert!(rendered.contains("status=\"405\""));
        assert!(rendered.contains("locale=\"en\""));
    }
}
