//! Static HTML page serving.
//!
//! The site's pages are plain HTML files in the templates directory. The
//! fallback serves `/` and `/index.html` from `index.html`, maps other
//! `*.html` paths to their file, and sends everything else to the index
//! so client-side anchors keep working.

use std::path::Path;

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Serve an HTML file from the templates directory.
pub(crate) async fn serve_template(templates_dir: &Path, name: &str) -> Response {
    let path = templates_dir.join(name);

    match tokio::fs::read(&path).await {
        Ok(contents) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            contents,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(page = %name, error = %e, "page not found");
            (StatusCode::NOT_FOUND, "Page not found").into_response()
        }
    }
}

/// Fallback handler for page requests.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let templates_dir = &state.config().templates_dir;
    let path = uri.path();

    if path == "/" || path.is_empty() || path == "/index.html" {
        return serve_template(templates_dir, "index.html").await;
    }

    let name = path.trim_start_matches('/');
    if Path::new(name).extension().is_some_and(|ext| ext == "html") {
        return serve_template(templates_dir, name).await;
    }

    serve_template(templates_dir, "index.html").await
}
