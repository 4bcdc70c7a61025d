//! HTTP route handlers and router assembly.
//!
//! Route tree:
//!
//! - `GET  /health`        liveness probe
//! - `GET  /health/ready`  readiness probe (checks the database)
//! - `GET  /register`      registration page
//! - `POST /register`      create an account
//! - `GET  /login`         login page
//! - `POST /login`         authenticate
//! - `GET  /logout`        destroy the session
//! - `GET  /dashboard`     logged-in user dashboard
//! - `POST /api/quote`     submit a quote request (JSON)
//! - `GET  /admin/quotes`  list quote requests (requires login)
//! - `/static`, `/img`, `/fonts` static assets
//! - fallback               HTML pages from the templates directory

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod pages;
pub mod quote;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::{create_session_layer, reject_traversal};
use crate::state::AppState;

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let config = state.config();

    Router::new()
        .route("/health", get(health::check))
        .route("/health/ready", get(health::ready))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(dashboard::show))
        .route("/api/quote", post(quote::submit))
        .route("/admin/quotes", get(admin::list_quotes))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .nest_service("/img", ServeDir::new(&config.img_dir))
        .nest_service("/fonts", ServeDir::new(&config.fonts_dir))
        .fallback(pages::fallback)
        .layer(axum::middleware::from_fn(reject_traversal))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
