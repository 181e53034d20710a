//! Error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur when reaching the database.
#[derive(Debug, Error)]
pub enum DbError {
    /// A required environment variable was not set.
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Database unreachable or query failed.
    Db(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Db(err) = self;
        tracing::error!(error = %err, "database health check failed");

        let body = serde_json::json!({
            "status": "error",
            "db": "error",
            "message": err.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Db(err)
    }
}
