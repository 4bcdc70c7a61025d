//! User domain type.

use chrono::{DateTime, Utc};

use modulspace_core::{Email, UserId};

/// A registered site user.
///
/// The password hash never leaves the `db` layer; login verification gets it
/// through `UserRepository::get_with_password_hash`.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address, unique across accounts.
    pub email: Email,
    /// Family name ("nom"), optional at registration.
    pub last_name: Option<String>,
    /// Given name ("prénom"), optional at registration.
    pub first_name: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
