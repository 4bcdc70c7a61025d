//! Authentication extractor.
//!
//! `RequireUser` gates handlers behind a logged-in session. Browser pages
//! redirect to the login form; API and admin paths get a plain 401.

use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::models::session::{CurrentUser, session_keys};

/// Extractor that requires a logged-in user.
pub struct RequireUser(pub CurrentUser);

/// Rejection for requests without a valid session.
#[derive(Debug)]
pub enum AuthRejection {
    RedirectToLogin,
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized").into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let wants_plain_rejection =
            parts.uri.path().starts_with("/api/") || parts.uri.path().starts_with("/admin/");
        let reject = || {
            if wants_plain_rejection {
                AuthRejection::Unauthorized
            } else {
                AuthRejection::RedirectToLogin
            }
        };

        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(reject)?;

        let user: Option<CurrentUser> = session
            .get(session_keys::CURRENT_USER)
            .await
            .map_err(|_| reject())?;

        user.map(Self).ok_or_else(reject)
    }
}

/// Store the logged-in user in the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Remove the logged-in user from the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .map(|_| ())
}
