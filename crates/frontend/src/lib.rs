//! Frontend API service.
//!
//! Exposes a single health endpoint that verifies database
//! reachability through a lazily-created connection pool, with
//! structured logging (tracing).

pub mod config;
pub mod db;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use db::LivenessProbe;
use routes::health::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<P: LivenessProbe + 'static>(state: Arc<AppState<P>>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::check::<P>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
