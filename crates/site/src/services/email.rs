//! Outbound email for quote notifications.
//!
//! Sends a plain-text notification to a fixed recipient for each quote
//! request. Without SMTP credentials the mailer runs in dev mode and logs
//! the message instead of sending it.

use askama::Template;
use lettre::message::header::ContentType;
use lettre::transport::smtp::Error as SmtpError;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::config::EmailConfig;
use crate::models::quote::NewQuote;

/// Errors that can occur when sending emails.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    #[error("failed to build email message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("no notification recipient configured")]
    NoRecipient,
}

/// Plain-text body of the quote notification email.
#[derive(Template)]
#[template(path = "email/quote_notification.txt")]
struct QuoteNotificationText<'a> {
    product: &'a str,
    last_name: &'a str,
    first_name: &'a str,
    email: &'a str,
    phone: &'a str,
}

/// Mailer for quote-request notifications.
///
/// `transport` is `None` in dev mode.
#[derive(Clone)]
pub struct QuoteMailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from_address: Option<String>,
    notify_to: Option<String>,
}

impl QuoteMailer {
    /// Build a mailer from the email configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP relay parameters are invalid.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let Some(creds) = &config.credentials else {
            tracing::info!("SMTP credentials not set, email notifications run in dev mode");
            return Ok(Self {
                transport: None,
                from_address: None,
                notify_to: config.notify_recipient().map(str::to_owned),
            });
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                creds.username.clone(),
                creds.password.expose_secret().to_owned(),
            ))
            .build();

        Ok(Self {
            transport: Some(transport),
            from_address: Some(creds.username.clone()),
            notify_to: config.notify_recipient().map(str::to_owned),
        })
    }

    /// Whether the mailer logs messages instead of sending them.
    #[must_use]
    pub const fn is_dev_mode(&self) -> bool {
        self.transport.is_none()
    }

    /// Send a notification for a new quote request.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be built or the SMTP send fails.
    pub async fn send_quote_notification(&self, quote: &NewQuote) -> Result<(), EmailError> {
        let subject = format!("Demande de devis - {}", quote.product);
        let body = QuoteNotificationText {
            product: &quote.product,
            last_name: &quote.last_name,
            first_name: &quote.first_name,
            email: quote.email.as_str(),
            phone: quote.phone.as_deref().unwrap_or(""),
        }
        .render()?;

        let Some(transport) = &self.transport else {
            tracing::info!(
                subject = %subject,
                "dev mode, email not sent:\n{body}"
            );
            return Ok(());
        };

        let from = self
            .from_address
            .as_deref()
            .ok_or(EmailError::NoRecipient)?;
        let to = self.notify_to.as_deref().ok_or(EmailError::NoRecipient)?;

        let message = Message::builder()
            .from(
                from.parse()
                    .map_err(|_| EmailError::InvalidAddress(from.to_owned()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_owned()))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        transport.send(message).await?;

        tracing::info!(to = %to, "quote notification sent");

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use modulspace_core::Email;

    fn sample_quote() -> NewQuote {
        NewQuote {
            last_name: "Dupont".to_owned(),
            first_name: "Marie".to_owned(),
            email: Email::parse("marie.dupont@example.com").unwrap(),
            phone: Some("0612345678".to_owned()),
            product: "Module 20m2".to_owned(),
            message: None,
        }
    }

    #[test]
    fn test_notification_body_contains_quote_fields() {
        let quote = sample_quote();
        let body = QuoteNotificationText {
            product: &quote.product,
            last_name: &quote.last_name,
            first_name: &quote.first_name,
            email: quote.email.as_str(),
            phone: quote.phone.as_deref().unwrap_or(""),
        }
        .render()
        .unwrap();

        assert!(body.contains("Module 20m2"));
        assert!(body.contains("Dupont"));
        assert!(body.contains("Marie"));
        assert!(body.contains("marie.dupont@example.com"));
        assert!(body.contains("0612345678"));
    }

    #[tokio::test]
    async fn test_dev_mode_send_succeeds() {
        let config = EmailConfig {
            smtp_host: "smtp.gmail.com".to_owned(),
            smtp_port: 587,
            credentials: None,
            notify_to: None,
        };
        let mailer = QuoteMailer::new(&config).unwrap();
        assert!(mailer.is_dev_mode());

        mailer.send_quote_notification(&sample_quote()).await.unwrap();
    }
}
