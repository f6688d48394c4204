//! CLI command implementations.

pub mod account;
pub mod migrate;

use secrecy::SecretString;

/// Read the database URL from `CLUBDESK_DATABASE_URL`, falling back to the
/// generic `DATABASE_URL`.
pub(crate) fn database_url() -> Option<SecretString> {
    std::env::var("CLUBDESK_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .map(SecretString::from)
}
