//! Quote request intake.

use axum::extract::{FromRequest, Request, State};
use axum::http::header;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use modulspace_core::Email;

use crate::db::quotes::QuoteRepository;
use crate::error::{AppError, Result};
use crate::models::quote::NewQuote;
use crate::state::AppState;

/// Incoming quote request body.
///
/// All fields default to empty strings so a missing field is rejected with
/// a 400 instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    nom: String,
    #[serde(default)]
    prenom: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    telephone: String,
    #[serde(default)]
    produit: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    status: &'static str,
    message: &'static str,
}

fn validate(form: &QuoteForm) -> Result<NewQuote> {
    let last_name = form.nom.trim();
    let first_name = form.prenom.trim();
    let email = form.email.trim();
    let product = form.produit.trim();

    if last_name.is_empty() || first_name.is_empty() || email.is_empty() || product.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".to_owned()));
    }

    let email = Email::parse(email).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let phone = Some(form.telephone.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_owned);
    let message = Some(form.message.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_owned);

    Ok(NewQuote {
        last_name: last_name.to_owned(),
        first_name: first_name.to_owned(),
        email,
        phone,
        product: product.to_owned(),
        message,
    })
}

/// Extract the quote body, accepting JSON or a urlencoded form.
async fn extract_form(req: Request) -> Result<QuoteForm> {
    let is_form = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        let Form(form) = Form::<QuoteForm>::from_request(req, &())
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(form)
    } else {
        let Json(form) = Json::<QuoteForm>::from_request(req, &())
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(form)
    }
}

/// Handle a quote request submission.
///
/// The quote is persisted when a database is configured; the notification
/// email is sent afterwards and its failure does not fail the request.
pub async fn submit(State(state): State<AppState>, req: Request) -> Result<Json<QuoteResponse>> {
    let form = extract_form(req).await?;
    let new_quote = validate(&form)?;

    let repo = QuoteRepository::new(state.pool());
    if let Some(quote) = repo.insert(&new_quote).await? {
        tracing::info!(
            quote_id = %quote.id,
            product = %new_quote.product,
            "quote request saved"
        );
    }

    if let Err(e) = state.mailer().send_quote_notification(&new_quote).await {
        tracing::error!(error = %e, "failed to send quote notification");
    }

    Ok(Json(QuoteResponse {
        status: "success",
        message: "Demande de devis enregistrée",
    }))
}
