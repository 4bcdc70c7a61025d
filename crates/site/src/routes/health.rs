//! Health check endpoints.

use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Liveness probe.
pub async fn check() -> &'static str {
    "ok"
}

/// Readiness probe.
///
/// Reports unavailable when the database is not configured or unreachable.
pub async fn ready(State(state): State<AppState>) -> Result<&'static str, StatusCode> {
    let Some(pool) = state.pool() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    Ok("ready")
}
