//! Session layer configuration.
//!
//! Sessions are stored server side; the browser only carries an opaque
//! session id cookie. State lives in an in-memory store, so sessions do
//! not survive a restart.

use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::SiteConfig;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "modulspace_session";

/// Sessions expire after seven days of inactivity.
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Build the session middleware layer.
///
/// The cookie is `HttpOnly` and `SameSite=Lax`; `Secure` is set when the
/// configured base URL uses https.
#[must_use]
pub fn create_session_layer(config: &SiteConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            SESSION_EXPIRY_SECONDS,
        )))
        .with_secure(config.is_secure())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
