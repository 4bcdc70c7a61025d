//! Business-logic services for the site.

pub mod auth;
pub mod email;

pub use auth::{AuthError, AuthService};
pub use email::{EmailError, QuoteMailer};
