//! Account domain types.

use chrono::{DateTime, Utc};

use clubdesk_core::{AccountId, Email};

/// A local account (domain type).
///
/// Accounts are provisioned out of band (via the CLI); there is no
/// self-registration endpoint. The token exchange resolves accounts by their
/// verified email address.
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Unique username; appears as `owner` in serialized clubs.
    pub username: String,
    /// Registered email address, if any. Creation notifications are skipped
    /// for accounts without one.
    pub email: Option<Email>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
