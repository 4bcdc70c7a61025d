//! Logged-in user dashboard.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::db::users::UserRepository;
use crate::error::Result;
use crate::middleware::RequireUser;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    email: String,
    last_name: String,
    first_name: String,
}

/// Render the dashboard for the logged-in user.
pub async fn show(
    State(state): State<AppState>,
    RequireUser(current): RequireUser,
) -> Result<Response> {
    let users = UserRepository::new(state.pool());

    // The session may outlive the account; fall back to the login page.
    let Some(user) = users.get_by_email(&current.email).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    let template = DashboardTemplate {
        email: user.email.to_string(),
        last_name: user.last_name.unwrap_or_default(),
        first_name: user.first_name.unwrap_or_default(),
    };

    Ok(template.into_response())
}
