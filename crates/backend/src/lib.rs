//! Backend HTTP service.
//!
//! A single health endpoint answering a static status payload,
//! with structured logging (tracing) and permissive CORS.

pub mod config;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/api/health", get(routes::health::check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
