//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! # Clubs (CORS: allow-origin *)
//! GET    /api/clubs/           - List active clubs
//! POST   /api/clubs/           - Create a club (token auth)
//! GET    /api/clubs/{id}/      - Retrieve a club
//! PATCH  /api/clubs/{id}/      - Update a club (owner only)
//! PUT    /api/clubs/{id}/      - Update a club (owner only)
//! DELETE /api/clubs/{id}/      - Soft-delete a club (owner only)
//!
//! # Token exchange (CORS: echoes the validated origin)
//! POST /persona/               - Trade an identity assertion for an API token
//! ```
//!
//! Trailing slashes are normalized away before routing, so both `/api/clubs`
//! and `/api/clubs/` resolve.

pub mod clubs;
pub mod persona;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the club routes router.
pub fn club_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(clubs::list).post(clubs::create))
        .route(
            "/{id}",
            get(clubs::retrieve)
                .patch(clubs::update)
                .put(clubs::update)
                .delete(clubs::destroy),
        )
}

/// Create the API namespace router.
///
/// Every path under `/api` answers with a wide-open `*` allow-origin so any
/// site can read the public data; the token exchange deliberately lives
/// outside this namespace with its own stricter per-origin policy.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/clubs", club_routes()).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/api", api_routes())
        .route("/persona", post(persona::exchange))
}

/// The full application service as served by the binary.
///
/// Applies, outermost first: trailing-slash normalization, the Sentry layers
/// (no-ops when Sentry is not initialized, as in tests), request tracing,
/// then the routes.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
