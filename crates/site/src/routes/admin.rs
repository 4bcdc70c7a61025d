//! Administrative quote listing.

use axum::Json;
use axum::extract::State;

use crate::db::quotes::QuoteRepository;
use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::quote::Quote;
use crate::state::AppState;

/// List all quote requests, newest first. Requires a logged-in session.
pub async fn list_quotes(
    State(state): State<AppState>,
    RequireUser(_current): RequireUser,
) -> Result<Json<Vec<Quote>>> {
    let repo = QuoteRepository::new(state.pool());
    let quotes = repo.list_all().await?;

    Ok(Json(quotes))
}
