//! Static page serving tests.

mod common;

use axum::http::StatusCode;

use common::{body_string, build_test_app, get};

#[tokio::test]
async fn index_served_at_root() {
    let response = get(build_test_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Modulspace"));
}

#[tokio::test]
async fn index_served_by_name() {
    let response = get(build_test_app(), "/index.html").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_falls_back_to_index() {
    let response = get(build_test_app(), "/produits").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Modulspace"));
}

#[tokio::test]
async fn named_html_page_served() {
    let response = get(build_test_app(), "/login.html").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Connexion"));
}

#[tokio::test]
async fn missing_html_page_is_404() {
    let response = get(build_test_app(), "/nope.html").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn traversal_paths_are_forbidden() {
    for path in ["/../etc/passwd", "/static/../../Cargo.toml", "/..%2f..", "/a/../b.html"] {
        let response = get(build_test_app(), path).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "path {path}");
    }
}

#[tokio::test]
async fn static_css_served() {
    let response = get(build_test_app(), "/static/css/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);
}
