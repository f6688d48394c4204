//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! clubdesk-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `CLUBDESK_DATABASE_URL` - `SQLite` connection string
//!   (falls back to `DATABASE_URL`)
//!
//! Migration files live in `crates/api/migrations/` and are embedded in the
//! api crate, so the CLI always applies exactly the set the server expects.

use thiserror::Error;

use clubdesk_api::db;

/// Errors that can occur during migration.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run all pending database migrations.
///
/// # Errors
///
/// Returns `MigrateError` if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), MigrateError> {
    dotenvy::dotenv().ok();

    let database_url =
        super::database_url().ok_or(MigrateError::MissingEnvVar("CLUBDESK_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    db::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
