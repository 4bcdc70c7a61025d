//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 8080)
//! - `BASE_URL` - Public URL of the site (default: <http://localhost:8080>);
//!   an `https://` scheme marks the session cookie `Secure`
//! - `DATABASE_URL` - `PostgreSQL` connection string; when absent the site runs
//!   without persistence (quote writes no-op, reads fail)
//! - `SMTP_HOST` - SMTP relay hostname (default: smtp.gmail.com)
//! - `SMTP_PORT` - SMTP relay port (default: 587)
//! - `SMTP_USER` / `SMTP_PASS` - SMTP credentials; when either is absent the
//!   quote notification email is logged instead of sent ("dev mode")
//! - `QUOTE_NOTIFY_TO` - Recipient of quote notifications (default: `SMTP_USER`)
//! - `TEMPLATES_DIR` / `STATIC_DIR` / `IMG_DIR` / `FONTS_DIR` - File-serving roots

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// `PostgreSQL` connection URL (contains password); `None` disables persistence
    pub database_url: Option<SecretString>,
    /// Root directory for HTML page templates
    pub templates_dir: PathBuf,
    /// Root directory served under `/static`
    pub static_dir: PathBuf,
    /// Root directory served under `/img`
    pub img_dir: PathBuf,
    /// Root directory served under `/fonts`
    pub fonts_dir: PathBuf,
    /// SMTP configuration for quote notifications
    pub email: EmailConfig,
}

/// SMTP configuration for the quote notification email.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct EmailConfig {
    /// SMTP relay hostname
    pub smtp_host: String,
    /// SMTP relay port
    pub smtp_port: u16,
    /// SMTP credentials; `None` means dev mode (log instead of send)
    pub credentials: Option<SmtpCredentials>,
    /// Fixed recipient for quote notifications
    pub notify_to: Option<String>,
}

/// SMTP authentication credentials.
#[derive(Clone)]
pub struct SmtpCredentials {
    /// SMTP username, also used as the From address
    pub username: String,
    /// SMTP password
    pub password: SecretString,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field(
                "credentials",
                &self.credentials.as_ref().map(|c| c.username.as_str()),
            )
            .field("notify_to", &self.notify_to)
            .finish()
    }
}

impl std::fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `HOST` or `PORT` cannot be parsed. Missing
    /// `DATABASE_URL` or SMTP credentials is not an error: the site degrades
    /// to no-persistence and dev-mode email instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("BASE_URL", "http://localhost:8080");
        let database_url = get_optional_env("DATABASE_URL").map(SecretString::from);

        let templates_dir = get_env_or_default("TEMPLATES_DIR", "crates/site/templates").into();
        let static_dir = get_env_or_default("STATIC_DIR", "crates/site/static").into();
        let img_dir = get_env_or_default("IMG_DIR", "crates/site/static/img").into();
        let fonts_dir = get_env_or_default("FONTS_DIR", "crates/site/fonts").into();

        let email = EmailConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            database_url,
            templates_dir,
            static_dir,
            img_dir,
            fonts_dir,
            email,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS (controls the `Secure` cookie flag).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let smtp_host = get_env_or_default("SMTP_HOST", "smtp.gmail.com");
        let smtp_port = get_env_or_default("SMTP_PORT", "587")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SMTP_PORT".to_string(), e.to_string()))?;

        // Both user and password must be present for real delivery
        let credentials = match (get_optional_env("SMTP_USER"), get_optional_env("SMTP_PASS")) {
            (Some(username), Some(password)) => Some(SmtpCredentials {
                username,
                password: SecretString::from(password),
            }),
            _ => None,
        };

        Ok(Self {
            smtp_host,
            smtp_port,
            credentials,
            notify_to: get_optional_env("QUOTE_NOTIFY_TO"),
        })
    }

    /// Recipient of quote notifications: `QUOTE_NOTIFY_TO`, falling back to
    /// the SMTP username (send-to-self).
    #[must_use]
    pub fn notify_recipient(&self) -> Option<&str> {
        self.notify_to
            .as_deref()
            .or_else(|| self.credentials.as_ref().map(|c| c.username.as_str()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_email_config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            credentials: Some(SmtpCredentials {
                username: "bot@example.com".to_string(),
                password: SecretString::from("super_secret_password"),
            }),
            notify_to: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            database_url: None,
            templates_dir: "templates".into(),
            static_dir: "static".into(),
            img_dir: "static/img".into(),
            fonts_dir: "fonts".into(),
            email: test_email_config(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8080);
        assert!(!config.is_secure());
    }

    #[test]
    fn test_is_secure_with_https_base_url() {
        let config = SiteConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 443,
            base_url: "https://modulspace.example".to_string(),
            database_url: None,
            templates_dir: "templates".into(),
            static_dir: "static".into(),
            img_dir: "static/img".into(),
            fonts_dir: "fonts".into(),
            email: test_email_config(),
        };
        assert!(config.is_secure());
    }

    #[test]
    fn test_email_config_debug_redacts_password() {
        let config = test_email_config();
        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("bot@example.com"));
        assert!(!debug_output.contains("super_secret_password"));
    }

    #[test]
    fn test_notify_recipient_falls_back_to_smtp_user() {
        let config = test_email_config();
        assert_eq!(config.notify_recipient(), Some("bot@example.com"));
    }

    #[test]
    fn test_notify_recipient_prefers_explicit_address() {
        let mut config = test_email_config();
        config.notify_to = Some("sales@modulspace.example".to_string());
        assert_eq!(config.notify_recipient(), Some("sales@modulspace.example"));
    }

    #[test]
    fn test_notify_recipient_none_in_dev_mode() {
        let mut config = test_email_config();
        config.credentials = None;
        assert_eq!(config.notify_recipient(), None);
    }
}
