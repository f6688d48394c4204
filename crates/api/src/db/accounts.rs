//! Account repository for database operations.
//!
//! Provides database access for accounts and their API tokens. Queries use
//! the sqlx runtime API with explicit row structs mapped into domain types.

use chrono::{DateTime, Utc};
use rand::RngCore;
use sqlx::SqlitePool;

use clubdesk_core::{AccountId, Email};

use super::RepositoryError;
use crate::models::Account;

/// Number of random bytes behind an API token (40 hex characters).
const TOKEN_BYTES: usize = 20;

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    email: Option<String>,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, RepositoryError> {
        let email = self
            .email
            .as_deref()
            .map(Email::parse)
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
            })?;

        Ok(Account {
            id: AccountId::new(self.id),
            username: self.username,
            email,
            created_at: self.created_at,
        })
    }
}

/// Repository for account database operations.
pub struct AccountRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an account by its registered email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r"
            SELECT id, username, email, created_at
            FROM account
            WHERE email = ?
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    /// Get an account by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r"
            SELECT id, username, email, created_at
            FROM account
            WHERE username = ?
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    /// Resolve the account holding an API token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_token(&self, token: &str) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r"
            SELECT a.id, a.username, a.email, a.created_at
            FROM account a
            JOIN api_token t ON t.account_id = a.id
            WHERE t.token = ?
            ",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username or email is taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        email: Option<&Email>,
    ) -> Result<Account, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO account (username, email, created_at)
            VALUES (?, ?, ?)
            ",
        )
        .bind(username)
        .bind(email)
        .bind(created_at)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username or email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(Account {
            id: AccountId::new(result.last_insert_rowid()),
            username: username.to_owned(),
            email: email.cloned(),
            created_at,
        })
    }

    /// Get the account's API token, issuing one if none exists yet.
    ///
    /// Tokens are stable: repeated calls return the same value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_or_create_token(
        &self,
        account_id: AccountId,
    ) -> Result<String, RepositoryError> {
        let existing = sqlx::query_scalar::<_, String>(
            r"
            SELECT token FROM api_token WHERE account_id = ?
            ",
        )
        .bind(account_id)
        .fetch_optional(self.pool)
        .await?;

        if let Some(token) = existing {
            return Ok(token);
        }

        sqlx::query(
            r"
            INSERT INTO api_token (account_id, token, created_at)
            VALUES (?, ?, ?)
            ON CONFLICT (account_id) DO NOTHING
            ",
        )
        .bind(account_id)
        .bind(generate_token())
        .bind(Utc::now())
        .execute(self.pool)
        .await?;

        // A concurrent exchange may have won the insert; read back the winner.
        let token = sqlx::query_scalar::<_, String>(
            r"
            SELECT token FROM api_token WHERE account_id = ?
            ",
        )
        .bind(account_id)
        .fetch_one(self.pool)
        .await?;

        Ok(token)
    }
}

/// Generate an opaque lowercase-hex API token.
fn generate_token() -> String {
    let mut bytes = [0_u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().fold(
        String::with_capacity(TOKEN_BYTES * 2),
        |mut out, byte| {
            use std::fmt::Write;
            let _ = write!(out, "{byte:02x}");
            out
        },
    )
}
