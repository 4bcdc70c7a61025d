//! Quote request ("demande de devis") domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use modulspace_core::{Email, QuoteId, QuoteStatus};

/// A persisted quote request.
///
/// Serializes with the French field names used by the public form and the
/// admin listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub id: QuoteId,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    pub email: Email,
    #[serde(rename = "telephone")]
    pub phone: Option<String>,
    #[serde(rename = "produit")]
    pub product: String,
    pub message: Option<String>,
    #[serde(rename = "date_creation")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "statut")]
    pub status: QuoteStatus,
}

/// A validated quote request ready to be persisted and mailed.
///
/// Built from the public form after presence checks; the database assigns
/// the id, timestamp, and initial status.
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub last_name: String,
    pub first_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub product: String,
    pub message: Option<String>,
}
