//! Quote intake API tests.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, build_test_app, get, post_json};

fn valid_quote() -> serde_json::Value {
    json!({
        "nom": "Dupont",
        "prenom": "Marie",
        "email": "marie.dupont@example.com",
        "telephone": "0612345678",
        "produit": "Module 20m2",
        "message": "Livraison possible en septembre ?"
    })
}

#[tokio::test]
async fn valid_quote_accepted() {
    let response = post_json(build_test_app(), "/api/quote", valid_quote()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Demande de devis enregistrée");
}

#[tokio::test]
async fn optional_fields_may_be_absent() {
    let body = json!({
        "nom": "Dupont",
        "prenom": "Marie",
        "email": "marie@example.com",
        "produit": "Module 40m2"
    });

    let response = post_json(build_test_app(), "/api/quote", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_required_fields_rejected() {
    for field in ["nom", "prenom", "email", "produit"] {
        let mut body = valid_quote();
        body.as_object_mut().expect("object").remove(field);

        let response = post_json(build_test_app(), "/api/quote", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "field {field}");
    }
}

#[tokio::test]
async fn whitespace_only_field_rejected() {
    let mut body = valid_quote();
    body["produit"] = json!("   ");

    let response = post_json(build_test_app(), "/api/quote", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_email_rejected() {
    let mut body = valid_quote();
    body["email"] = json!("not-an-email");

    let response = post_json(build_test_app(), "/api/quote", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn urlencoded_form_body_accepted() {
    let body = "nom=Dupont&prenom=Jean&email=j%40x.com&produit=Module%2020m2";
    let response = common::post_form(build_test_app(), "/api/quote", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn malformed_json_rejected() {
    let app = build_test_app();
    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/quote")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{not json"))
                .expect("request builds"),
        )
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_method_not_allowed() {
    let response = get(build_test_app(), "/api/quote").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
