//! Integration tests for the frontend API server.
//!
//! The handler is exercised through a stub probe so every branch of
//! the response contract is covered without a database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use frontend::db::LivenessProbe;
use frontend::error::DbError;
use frontend::routes::health::AppState;
use tower::ServiceExt;

/// Probe returning a canned result instead of querying a database.
enum StubProbe {
    Value(i32),
    PoolFailure,
    QueryFailure,
}

#[async_trait]
impl LivenessProbe for StubProbe {
    async fn ping(&self) -> Result<i32, DbError> {
        match self {
            StubProbe::Value(v) => Ok(*v),
            StubProbe::PoolFailure => Err(DbError::MissingEnv("DB_HOST")),
            StubProbe::QueryFailure => Err(DbError::Database(sqlx::Error::RowNotFound)),
        }
    }
}

fn setup(probe: StubProbe) -> axum::Router {
    frontend::create_app(Arc::new(AppState { probe }))
}

async fn get_health(app: axum::Router) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_check_db_ok() {
    let (status, json) = get_health(setup(StubProbe::Value(1))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "ok", "db": "ok" }));
}

#[tokio::test]
async fn test_health_check_db_unknown_on_unexpected_value() {
    let (status, json) = get_health(setup(StubProbe::Value(0))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "ok", "db": "unknown" }));
}

#[tokio::test]
async fn test_health_check_pool_failure() {
    let (status, json) = get_health(setup(StubProbe::PoolFailure)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "error");
    assert_eq!(json["db"], "error");
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_check_query_failure() {
    let (status, json) = get_health(setup(StubProbe::QueryFailure)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "error");
    assert_eq!(json["db"], "error");
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup(StubProbe::Value(1));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
