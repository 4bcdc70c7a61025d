//! HTTP middleware.

pub mod auth;
pub mod session;

pub use auth::RequireUser;
pub use session::create_session_layer;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Reject any request whose path contains a parent-directory component.
///
/// The URI path reaches file-serving handlers without normalization, so
/// traversal sequences are refused up front for every route.
pub async fn reject_traversal(req: Request, next: Next) -> Response {
    if req.uri().path().contains("..") {
        return StatusCode::FORBIDDEN.into_response();
    }

    next.run(req).await
}
