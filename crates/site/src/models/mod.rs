//! Domain types for the site.
//!
//! These types represent validated domain objects separate from database
//! row types, which live in the `db` module.

pub mod quote;
pub mod session;
pub mod user;

pub use quote::{NewQuote, Quote};
pub use session::{CurrentUser, session_keys};
pub use user::User;
