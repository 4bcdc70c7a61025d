//! User repository for database operations.
//!
//! Queries are built at runtime (`sqlx::query_as`) because the database is
//! optional at startup and no compile-time schema is available.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use modulspace_core::{Email, UserId};

use super::RepositoryError;
use crate::models::user::User;

/// Column list for `users` queries.
const USER_COLUMNS: &str = "id, email, password_hash, nom, prenom, created_at";

/// Raw database row for a user.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    password_hash: String,
    nom: Option<String>,
    prenom: Option<String>,
    created_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert the row into the domain type plus its password hash.
    fn into_parts(self) -> Result<(User, String), RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        let user = User {
            id: UserId::new(self.id),
            email,
            last_name: self.nom,
            first_name: self.prenom,
            created_at: self.created_at,
        };
        Ok((user, self.password_hash))
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: Option<&'a PgPool>,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository over the (optional) shared pool.
    #[must_use]
    pub const fn new(pool: Option<&'a PgPool>) -> Self {
        Self { pool }
    }

    fn require_pool(&self) -> Result<&'a PgPool, RepositoryError> {
        self.pool.ok_or(RepositoryError::NotConfigured)
    }

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists (the
    /// unique constraint is the source of truth, there is no prior read).
    /// Returns `RepositoryError::NotConfigured` without a database.
    pub async fn create(
        &self,
        email: &Email,
        password_hash: &str,
        last_name: Option<&str>,
        first_name: Option<&str>,
    ) -> Result<User, RepositoryError> {
        let pool = self.require_pool()?;

        let query = format!(
            "INSERT INTO users (email, password_hash, nom, prenom)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(email.as_str())
            .bind(password_hash)
            .bind(last_name)
            .bind(first_name)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict("email already exists".to_owned());
                }
                RepositoryError::Database(e)
            })?;

        let (user, _) = row.into_parts()?;
        Ok(user)
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::NotConfigured` without a database.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let pool = self.require_pool()?;

        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(email.as_str())
            .fetch_optional(pool)
            .await?;

        match row {
            Some(r) => {
                let (user, _) = r.into_parts()?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Get a user together with their password hash, for login verification.
    ///
    /// Returns `None` if no account exists for the email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::NotConfigured` without a database.
    pub async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let pool = self.require_pool()?;

        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(email.as_str())
            .fetch_optional(pool)
            .await?;

        row.map(UserRow::into_parts).transpose()
    }
}
