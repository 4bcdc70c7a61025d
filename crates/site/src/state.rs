//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::SiteConfig;
use crate::services::email::QuoteMailer;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and configuration.
///
/// The pool is optional: without `DATABASE_URL` the site serves pages and
/// accepts quote submissions without persisting anything.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: Option<PgPool>,
    mailer: QuoteMailer,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP transport cannot be constructed from
    /// the configured relay host.
    pub fn new(
        config: SiteConfig,
        pool: Option<PgPool>,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let mailer = QuoteMailer::new(&config.email)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                mailer,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get the database connection pool, if persistence is configured.
    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }

    /// Get a reference to the quote notification mailer.
    #[must_use]
    pub fn mailer(&self) -> &QuoteMailer {
        &self.inner.mailer
    }
}
