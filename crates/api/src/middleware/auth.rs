//! Authentication extractor for token-bearing requests.
//!
//! Clients authenticate with the opaque token obtained from the token
//! exchange, sent as `Authorization: Token <hex>`.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};

use crate::db::AccountRepository;
use crate::models::Account;
use crate::state::AppState;

/// Extractor that requires an authenticated account.
///
/// The rejection is a bare 403: a missing, malformed, or unknown token gets
/// the same forbidden outcome as a non-owner write, with no body detail.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(actor): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", actor.username)
/// }
/// ```
pub struct RequireAuth(pub Account);

/// Error returned when authentication is required but absent or invalid.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        StatusCode::FORBIDDEN.into_response()
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthRejection)?;

        let token = header.strip_prefix("Token ").ok_or(AuthRejection)?.trim();
        if token.is_empty() {
            return Err(AuthRejection);
        }

        let account = AccountRepository::new(state.pool())
            .get_by_token(token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "token lookup failed");
                AuthRejection
            })?
            .ok_or(AuthRejection)?;

        Ok(Self(account))
    }
}
