//! Database health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::db::LivenessProbe;
use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<P: LivenessProbe> {
    pub probe: P,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub db: &'static str,
}

/// GET /api/health — checks that the database answers a liveness query.
///
/// A query result of exactly 1 reports the database as `"ok"`; any
/// other value is reported as `"unknown"` without failing the request.
pub async fn check<P: LivenessProbe>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let value = state.probe.ping().await?;

    let db = if value == 1 { "ok" } else { "unknown" };
    Ok(Json(HealthResponse { status: "ok", db }))
}
