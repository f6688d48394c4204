//! Account provisioning commands.
//!
//! # Usage
//!
//! ```bash
//! # Create an account
//! clubdesk-cli account create -u maria -e maria@example.org
//!
//! # Issue (or print the existing) API token
//! clubdesk-cli account token -u maria
//! ```
//!
//! Accounts have no self-registration endpoint; the token exchange only
//! resolves accounts that already exist, so this is the provisioning path.
//!
//! # Environment Variables
//!
//! - `CLUBDESK_DATABASE_URL` - `SQLite` connection string
//!   (falls back to `DATABASE_URL`)

use thiserror::Error;

use clubdesk_api::db::{self, AccountRepository, RepositoryError};
use clubdesk_core::{Email, EmailError};

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository error (conflicts included).
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// No account with that username.
    #[error("No account with username: {0}")]
    UnknownAccount(String),
}

/// Create a new account.
///
/// # Errors
///
/// Returns `AccountError` if the email is invalid, the username or email is
/// already taken, or the database is unreachable.
pub async fn create(username: &str, email: Option<&str>) -> Result<(), AccountError> {
    dotenvy::dotenv().ok();

    let email = email.map(Email::parse).transpose()?;

    let database_url =
        super::database_url().ok_or(AccountError::MissingEnvVar("CLUBDESK_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let account = AccountRepository::new(&pool)
        .create(username, email.as_ref())
        .await?;

    tracing::info!(
        "Account created successfully! ID: {}, Username: {}",
        account.id,
        account.username
    );
    if account.email.is_none() {
        tracing::warn!(
            "Account has no email address; the token exchange will not be able to resolve it. \
             Use 'account token' to issue a token directly."
        );
    }

    Ok(())
}

/// Issue (or print the existing) API token for an account.
///
/// # Errors
///
/// Returns `AccountError` if the account does not exist or the database is
/// unreachable.
pub async fn token(username: &str) -> Result<(), AccountError> {
    dotenvy::dotenv().ok();

    let database_url =
        super::database_url().ok_or(AccountError::MissingEnvVar("CLUBDESK_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let accounts = AccountRepository::new(&pool);
    let account = accounts
        .get_by_username(username)
        .await?
        .ok_or_else(|| AccountError::UnknownAccount(username.to_owned()))?;

    let token = accounts.get_or_create_token(account.id).await?;

    tracing::info!("API token for {}: {}", account.username, token);
    tracing::info!("Send it as: Authorization: Token {}", token);

    Ok(())
}
