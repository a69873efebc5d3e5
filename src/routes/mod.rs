//! HTTP route handlers.
//!
//! The route table is static: two GET routes mapped to constant responses.
//! Anything else falls through to axum's default 404 handling. The health
//! route carries a `Cache-Control: no-store` header so orchestrator probes
//! always see a fresh response.

pub mod health;
pub mod home;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Creates the Axum router with both routes and request tracing.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(home::index))
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
}
