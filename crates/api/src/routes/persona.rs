//! Token exchange: trade an identity assertion for an API token.
//!
//! The endpoint is consumed cross-origin by a whitelisted single-page app,
//! so every response after the origin gate carries an
//! `access-control-allow-origin` header echoing exactly the requesting
//! origin. Failure responses are fixed plain-text strings.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use clubdesk_core::Email;

use crate::config::ApiConfig;
use crate::db::AccountRepository;
use crate::error::AppError;
use crate::services::VerificationResult;
use crate::state::AppState;

/// Successful exchange payload.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub username: String,
    pub token: String,
}

/// Exchange an identity assertion for an API token.
///
/// POST /persona/
///
/// State machine, in order:
/// 1. Origin gate: the `Origin` header must be in the configured allow-list.
///    A `*` entry only counts in development mode.
/// 2. The form body must carry a non-empty `assertion` field.
/// 3. The assertion must verify against this service's own origin.
/// 4. The verified email must resolve to a local account.
/// 5. The account's token is issued (or reused) and returned.
pub async fn exchange(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let Some(origin) = allowed_origin(&headers, state.config()) else {
        return (StatusCode::FORBIDDEN, "invalid origin").into_response();
    };

    let Some(assertion) = extract_assertion(&body) else {
        return with_allow_origin(
            &origin,
            (StatusCode::BAD_REQUEST, "assertion required").into_response(),
        );
    };

    let audience = state.config().base_url_trimmed();
    let email = match state.verifier().verify(&assertion, audience).await {
        VerificationResult::Verified { email } => email,
        VerificationResult::Failed { reason } => {
            tracing::debug!(reason = %reason, "assertion verification failed");
            return with_allow_origin(&origin, invalid_assertion());
        }
    };

    let Ok(email) = Email::parse(&email) else {
        return with_allow_origin(&origin, invalid_assertion());
    };

    let accounts = AccountRepository::new(state.pool());
    let account = match accounts.get_by_email(&email).await {
        Ok(Some(account)) => account,
        // Unknown emails get the same response as bad assertions, so the
        // endpoint does not reveal which addresses have accounts.
        Ok(None) => return with_allow_origin(&origin, invalid_assertion()),
        Err(e) => return with_allow_origin(&origin, AppError::Database(e).into_response()),
    };

    let token = match accounts.get_or_create_token(account.id).await {
        Ok(token) => token,
        Err(e) => return with_allow_origin(&origin, AppError::Database(e).into_response()),
    };

    with_allow_origin(
        &origin,
        Json(TokenResponse {
            username: account.username,
            token,
        })
        .into_response(),
    )
}

fn invalid_assertion() -> Response {
    (StatusCode::FORBIDDEN, "invalid assertion or email").into_response()
}

/// Validate the request origin against the allow-list.
///
/// Returns the origin to echo back, or `None` when the request must be
/// rejected. A `*` allow-list entry grants nothing outside development mode:
/// in production every origin must be listed explicitly.
fn allowed_origin(headers: &HeaderMap, config: &ApiConfig) -> Option<String> {
    let origin = headers.get(header::ORIGIN)?.to_str().ok()?;

    let listed = config.persona_origins.iter().any(|allowed| allowed == origin);
    let dev_wildcard = config.debug && config.persona_origins.iter().any(|allowed| allowed == "*");

    (listed || dev_wildcard).then(|| origin.to_owned())
}

/// Pull a non-empty `assertion` field out of a form-encoded body.
fn extract_assertion(body: &str) -> Option<String> {
    url::form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == "assertion")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Grant exactly the requesting origin cross-origin read access.
fn with_allow_origin(origin: &str, mut response: Response) -> Response {
    if let Ok(value) = HeaderValue::from_str(origin) {
        response
            .headers_mut()
            .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    response
}
