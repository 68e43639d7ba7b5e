//! Axum router assembly.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use rfbridge_app::latest_cache::LatestValueCache;

/// Build the top-level axum [`Router`] over the latest-value cache.
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(cache: Arc<LatestValueCache>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/sensor/{instance}/{tag}", get(crate::api::get_sensor))
        .layer(TraceLayer::new_for_http())
        .with_state(cache)
}

async fn health_check() -> &'static str {
    "OK"
}
