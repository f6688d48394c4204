//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::ApiConfig;
use crate::services::{AssertionVerifier, Mailer};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources like the database pool, configuration, and the injected mail and
/// verifier collaborators.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: SqlitePool,
    mailer: Arc<dyn Mailer>,
    verifier: Arc<dyn AssertionVerifier>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The mailer and verifier are injected here so tests can swap in doubles
    /// without touching handler code.
    #[must_use]
    pub fn new(
        config: ApiConfig,
        pool: SqlitePool,
        mailer: Arc<dyn Mailer>,
        verifier: Arc<dyn AssertionVerifier>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                mailer,
                verifier,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Get a reference to the mail transport.
    #[must_use]
    pub fn mailer(&self) -> &dyn Mailer {
        self.inner.mailer.as_ref()
    }

    /// Get a reference to the identity-assertion verifier.
    #[must_use]
    pub fn verifier(&self) -> &dyn AssertionVerifier {
        self.inner.verifier.as_ref()
    }
}
