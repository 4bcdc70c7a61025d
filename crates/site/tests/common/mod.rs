//! Shared helpers for integration tests.
//!
//! Tests run against the full router without a database and with email in
//! dev mode, so no external services are needed.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use modulspace_site::config::{EmailConfig, SiteConfig};
use modulspace_site::routes;
use modulspace_site::state::AppState;

/// Build a test configuration with relative asset directories.
///
/// Integration tests run with the crate directory as the working directory,
/// so the real templates and static assets are picked up.
#[must_use]
pub fn test_config() -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        base_url: "http://localhost:8080".to_owned(),
        database_url: None,
        templates_dir: "templates".into(),
        static_dir: "static".into(),
        img_dir: "static/img".into(),
        fonts_dir: "fonts".into(),
        email: EmailConfig {
            smtp_host: "smtp.gmail.com".to_owned(),
            smtp_port: 587,
            credentials: None,
            notify_to: None,
        },
    }
}

/// Build the application router backed by no database.
#[must_use]
pub fn build_test_app() -> Router {
    let state = AppState::new(test_config(), None).expect("state builds without smtp");
    routes::app(state)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Issue a POST request with a urlencoded form body.
pub async fn post_form(app: Router, path: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Read a response body as a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is json")
}
