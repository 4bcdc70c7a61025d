//! Quote request repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use modulspace_core::{Email, QuoteId, QuoteStatus};

use super::RepositoryError;
use crate::models::quote::{NewQuote, Quote};

/// Column list for `demandes_devis` queries.
const QUOTE_COLUMNS: &str = "id, nom, prenom, email, telephone, produit, message, \
    date_creation, statut";

/// Raw database row for a quote request.
#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: i32,
    nom: String,
    prenom: String,
    email: String,
    telephone: Option<String>,
    produit: String,
    message: Option<String>,
    date_creation: DateTime<Utc>,
    statut: String,
}

impl QuoteRow {
    fn into_quote(self) -> Result<Quote, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let status: QuoteStatus = self
            .statut
            .parse()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Quote {
            id: QuoteId::new(self.id),
            last_name: self.nom,
            first_name: self.prenom,
            email,
            phone: self.telephone,
            product: self.produit,
            message: self.message,
            created_at: self.date_creation,
            status,
        })
    }
}

/// Repository for quote request database operations.
pub struct QuoteRepository<'a> {
    pool: Option<&'a PgPool>,
}

impl<'a> QuoteRepository<'a> {
    /// Create a new quote repository over the (optional) shared pool.
    #[must_use]
    pub const fn new(pool: Option<&'a PgPool>) -> Self {
        Self { pool }
    }

    /// Insert a new quote request.
    ///
    /// Without a configured database the insert is a logged no-op and
    /// `Ok(None)` is returned: a missing database must not fail the public
    /// quote form.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, new_quote: &NewQuote) -> Result<Option<Quote>, RepositoryError> {
        let Some(pool) = self.pool else {
            tracing::warn!(
                product = %new_quote.product,
                "database not configured, quote request not persisted"
            );
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO demandes_devis (nom, prenom, email, telephone, produit, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {QUOTE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, QuoteRow>(&query)
            .bind(&new_quote.last_name)
            .bind(&new_quote.first_name)
            .bind(new_quote.email.as_str())
            .bind(&new_quote.phone)
            .bind(&new_quote.product)
            .bind(&new_quote.message)
            .fetch_one(pool)
            .await?;

        row.into_quote().map(Some)
    }

    /// List all quote requests, newest first. No pagination.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotConfigured` without a database and
    /// `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Quote>, RepositoryError> {
        let pool = self.pool.ok_or(RepositoryError::NotConfigured)?;

        let query =
            format!("SELECT {QUOTE_COLUMNS} FROM demandes_devis ORDER BY date_creation DESC");
        let rows = sqlx::query_as::<_, QuoteRow>(&query).fetch_all(pool).await?;

        rows.into_iter().map(QuoteRow::into_quote).collect()
    }
}
