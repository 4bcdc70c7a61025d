//! Database operations for the site `PostgreSQL` instance.
//!
//! ## Tables
//!
//! - `users` - Site authentication accounts
//! - `demandes_devis` - Quote requests submitted through the public form
//!
//! The schema is created lazily at startup with `CREATE TABLE IF NOT EXISTS`;
//! there is no migration system. The pool is optional: repositories accept
//! `Option<&PgPool>` so handlers degrade gracefully when `DATABASE_URL` is
//! unset (quote writes no-op, everything else reports "not configured").

pub mod quotes;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors from the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No `DATABASE_URL` was configured.
    #[error("database not configured")]
    NotConfigured,

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Idempotent schema statements run at startup.
const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        email VARCHAR(255) UNIQUE NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        nom VARCHAR(100),
        prenom VARCHAR(100),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)",
    "CREATE TABLE IF NOT EXISTS demandes_devis (
        id SERIAL PRIMARY KEY,
        nom VARCHAR(100) NOT NULL,
        prenom VARCHAR(100) NOT NULL,
        email VARCHAR(255) NOT NULL,
        telephone VARCHAR(20),
        produit VARCHAR(255) NOT NULL,
        message TEXT,
        date_creation TIMESTAMPTZ NOT NULL DEFAULT now(),
        statut VARCHAR(50) NOT NULL DEFAULT 'nouveau'
    )",
    "CREATE INDEX IF NOT EXISTS idx_devis_email ON demandes_devis(email)",
    "CREATE INDEX IF NOT EXISTS idx_devis_date ON demandes_devis(date_creation)",
];

/// Create the tables and indexes if they don't exist yet.
///
/// # Errors
///
/// Returns `sqlx::Error` if any statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("database schema verified");
    Ok(())
}
