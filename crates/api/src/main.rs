//! Clubdesk API - Community clubs backend.
//!
//! This binary serves the clubs REST API and the token-exchange endpoint.
//!
//! # Architecture
//!
//! - Axum web framework, JSON API only
//! - Embedded `SQLite` for accounts, tokens, and clubs
//! - Pluggable identity-assertion verifier (remote HTTP service in production)
//! - Pluggable mail transport for best-effort creation notifications
//!
//! # Security
//!
//! The API namespace answers with a wide-open CORS allow-origin because all
//! its data is public. The token exchange restricts itself to a configured
//! origin allow-list and echoes only the validated origin back.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::ServiceExt;
use axum::extract::Request;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clubdesk_api::config::ApiConfig;
use clubdesk_api::services::{HttpMailer, Mailer, NullMailer, PersonaVerifier};
use clubdesk_api::state::AppState;
use clubdesk_api::{db, routes};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ApiConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clubdesk_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // NOTE: Migrations are NOT run automatically on startup.
    // Run them explicitly via: cargo run -p clubdesk-cli -- migrate

    // Wire the injected collaborators: HTTP relay mailer when configured,
    // otherwise notifications are logged and dropped
    let mailer: Arc<dyn Mailer> = match &config.mail_api {
        Some(mail_api) => Arc::new(
            HttpMailer::new(mail_api, &config.mail_from).expect("Failed to create mailer"),
        ),
        None => Arc::new(NullMailer),
    };
    let verifier = Arc::new(PersonaVerifier::new(&config.verifier_url));

    // Build application state and router
    let state = AppState::new(config.clone(), pool, mailer, verifier);
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("clubdesk api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
