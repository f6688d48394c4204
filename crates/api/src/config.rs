//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CLUBDESK_DATABASE_URL` - `SQLite` connection string (e.g., `sqlite://clubdesk.db`)
//! - `CLUBDESK_BASE_URL` - Public URL for the service; doubles as the audience
//!   handed to the assertion verifier and as the prefix of serialized club URLs
//! - `CLUBDESK_MAIL_FROM` - Sender address for notification emails
//!
//! ## Optional
//! - `CLUBDESK_HOST` - Bind address (default: 127.0.0.1)
//! - `CLUBDESK_PORT` - Listen port (default: 3000)
//! - `CLUBDESK_STAFF_EMAILS` - Comma-separated staff notification recipients;
//!   empty or unset disables the staff notification on club creation
//! - `CLUBDESK_PERSONA_ORIGINS` - Comma-separated origin allow-list for the
//!   token-exchange endpoint
//! - `CLUBDESK_DEBUG` - Development-mode flag; a `*` entry in the origin
//!   allow-list only takes effect when this is set
//! - `CLUBDESK_VERIFIER_URL` - Identity-assertion verifier endpoint
//!   (default: the public Persona fallback verifier)
//! - `CLUBDESK_MAIL_API_URL` - HTTP mail relay endpoint; unset means
//!   notifications are logged and dropped
//! - `CLUBDESK_MAIL_API_KEY` - Bearer key for the mail relay
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default endpoint of the public assertion verifier.
pub const DEFAULT_VERIFIER_URL: &str = "https://verifier.login.persona.org/verify";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `SQLite` database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the service
    pub base_url: String,
    /// Sender address for notification emails
    pub mail_from: String,
    /// Staff recipients notified of club creations; empty disables the notification
    pub staff_emails: Vec<String>,
    /// Origin allow-list for the token-exchange endpoint
    pub persona_origins: Vec<String>,
    /// Development-mode flag gating wildcard origin behavior
    pub debug: bool,
    /// Identity-assertion verifier endpoint
    pub verifier_url: String,
    /// HTTP mail relay configuration
    pub mail_api: Option<MailApiConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// HTTP mail relay configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct MailApiConfig {
    /// Relay endpoint accepting JSON `{from, to, subject, body}` messages
    pub url: String,
    /// Bearer key for the relay
    pub api_key: Option<SecretString>,
}

impl std::fmt::Debug for MailApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailApiConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("CLUBDESK_DATABASE_URL")?;
        let host = get_env_or_default("CLUBDESK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CLUBDESK_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("CLUBDESK_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CLUBDESK_PORT".to_owned(), e.to_string()))?;
        let base_url = get_required_env("CLUBDESK_BASE_URL")?;
        let mail_from = get_required_env("CLUBDESK_MAIL_FROM")?;
        let staff_emails = parse_list(&get_env_or_default("CLUBDESK_STAFF_EMAILS", ""));
        let persona_origins = parse_list(&get_env_or_default("CLUBDESK_PERSONA_ORIGINS", ""));
        let debug = parse_flag(&get_env_or_default("CLUBDESK_DEBUG", ""));
        let verifier_url = get_env_or_default("CLUBDESK_VERIFIER_URL", DEFAULT_VERIFIER_URL);
        let mail_api = get_optional_env("CLUBDESK_MAIL_API_URL").map(|url| MailApiConfig {
            url,
            api_key: get_optional_env("CLUBDESK_MAIL_API_KEY").map(SecretString::from),
        });
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            mail_from,
            staff_emails,
            persona_origins,
            debug,
            verifier_url,
            mail_api,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    // Fallback to generic DATABASE_URL
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Split a comma-separated list, trimming whitespace and dropping empties.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Interpret a string as a boolean flag.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
