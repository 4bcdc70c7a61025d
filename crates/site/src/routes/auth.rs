//! Registration, login and logout handlers.

use axum::Form;
use axum::extract::State;
use axum::response::{Redirect, Response};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::auth::{clear_current_user, set_current_user};
use crate::models::session::CurrentUser;
use crate::services::AuthService;
use crate::state::AppState;

use super::pages::serve_template;

/// Fields missing from the form body default to empty and are rejected
/// explicitly, so malformed submissions get a 400 rather than a 422.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    nom: Option<String>,
    #[serde(default)]
    prenom: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Serve the registration page.
pub async fn register_page(State(state): State<AppState>) -> Response {
    serve_template(&state.config().templates_dir, "register.html").await
}

/// Serve the login page.
pub async fn login_page(State(state): State<AppState>) -> Response {
    serve_template(&state.config().templates_dir, "login.html").await
}

/// Handle a registration form submission.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect> {
    let email = form.email.trim();
    let password = form.password.as_str();

    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Email et mot de passe requis".to_owned(),
        ));
    }

    let auth = AuthService::new(state.pool());
    let user = auth
        .register(
            email,
            password,
            form.nom.as_deref().map(str::trim).filter(|s| !s.is_empty()),
            form.prenom
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty()),
        )
        .await?;

    let current = CurrentUser {
        id: user.id,
        email: user.email,
    };
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to store session: {e}")))?;

    tracing::info!(user_id = %current.id, "user registered");

    Ok(Redirect::to("/dashboard"))
}

/// Handle a login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let email = form.email.trim();
    let password = form.password.as_str();

    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Email et mot de passe requis".to_owned(),
        ));
    }

    let auth = AuthService::new(state.pool());
    let user = auth.login(email, password).await?;

    let current = CurrentUser {
        id: user.id,
        email: user.email,
    };
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to store session: {e}")))?;

    tracing::info!(user_id = %current.id, "user logged in");

    Ok(Redirect::to("/dashboard"))
}

/// Destroy the session and return to the home page.
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("failed to flush session: {e}")))?;

    Ok(Redirect::to("/"))
}
