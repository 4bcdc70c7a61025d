//! Health endpoint tests.

mod common;

use axum::http::StatusCode;

use common::{body_string, build_test_app, get};

#[tokio::test]
async fn liveness_always_ok() {
    let response = get(build_test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn readiness_unavailable_without_database() {
    let response = get(build_test_app(), "/health/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
