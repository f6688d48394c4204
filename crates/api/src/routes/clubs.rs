//! Club resource handlers.
//!
//! Clubs can be read by anyone, but creating a new club requires
//! authentication. The account that created a club is its owner and the only
//! one who can make future edits to it. Deleting a club marks it inactive
//! rather than removing the record.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use clubdesk_core::ClubId;

use crate::db::ClubRepository;
use crate::error::{AppError, FieldErrors, Result};
use crate::middleware::RequireAuth;
use crate::models::{Club, NewClub};
use crate::permissions::can_write;
use crate::services::notifications;
use crate::state::AppState;

const REQUIRED_MESSAGE: &str = "this field is required";
const BLANK_MESSAGE: &str = "this field may not be blank";

/// Serialized club representation.
///
/// The owner appears as a username string, never as an internal identifier.
#[derive(Debug, Serialize)]
pub struct ClubJson {
    pub url: String,
    pub owner: String,
    pub name: String,
    pub website: String,
    pub description: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ClubJson {
    fn from_club(club: &Club, base_url: &str) -> Self {
        Self {
            url: format!("{base_url}/api/clubs/{}/", club.id),
            owner: club.owner_username.clone(),
            name: club.name.clone(),
            website: club.website.clone(),
            description: club.description.clone(),
            location: club.location.clone(),
            latitude: club.latitude,
            longitude: club.longitude,
        }
    }
}

/// Create payload. Every field is required; the owner is never part of the
/// payload and any client-supplied value for it is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateClubPayload {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Update payload. Absent fields are left unchanged; provided text fields
/// must not be blank. The id and owner can never change.
#[derive(Debug, Deserialize)]
pub struct UpdateClubPayload {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

fn require_text(
    field: &'static str,
    value: Option<String>,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        None => {
            errors.entry(field).or_default().push(REQUIRED_MESSAGE.to_owned());
            None
        }
        Some(s) if s.trim().is_empty() => {
            errors.entry(field).or_default().push(BLANK_MESSAGE.to_owned());
            None
        }
        Some(s) => Some(s),
    }
}

fn require_number(
    field: &'static str,
    value: Option<f64>,
    errors: &mut FieldErrors,
) -> Option<f64> {
    if value.is_none() {
        errors.entry(field).or_default().push(REQUIRED_MESSAGE.to_owned());
    }
    value
}

fn validate_create(payload: CreateClubPayload) -> std::result::Result<NewClub, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = require_text("name", payload.name, &mut errors);
    let website = require_text("website", payload.website, &mut errors);
    let description = require_text("description", payload.description, &mut errors);
    let location = require_text("location", payload.location, &mut errors);
    let latitude = require_number("latitude", payload.latitude, &mut errors);
    let longitude = require_number("longitude", payload.longitude, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewClub {
        name: name.unwrap_or_default(),
        website: website.unwrap_or_default(),
        description: description.unwrap_or_default(),
        location: location.unwrap_or_default(),
        latitude: latitude.unwrap_or_default(),
        longitude: longitude.unwrap_or_default(),
    })
}

fn apply_update(
    club: &mut Club,
    payload: UpdateClubPayload,
) -> std::result::Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let mut set_text = |field: &'static str, target: &mut String, value: Option<String>| {
        if let Some(value) = value {
            if value.trim().is_empty() {
                errors.entry(field).or_default().push(BLANK_MESSAGE.to_owned());
            } else {
                *target = value;
            }
        }
    };

    set_text("name", &mut club.name, payload.name);
    set_text("website", &mut club.website, payload.website);
    set_text("description", &mut club.description, payload.description);
    set_text("location", &mut club.location, payload.location);

    if let Some(latitude) = payload.latitude {
        club.latitude = latitude;
    }
    if let Some(longitude) = payload.longitude {
        club.longitude = longitude;
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// List all active clubs in insertion order.
///
/// GET /api/clubs/
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ClubJson>>> {
    let clubs = ClubRepository::new(state.pool()).list_active().await?;
    let base_url = state.config().base_url_trimmed();

    Ok(Json(
        clubs
            .iter()
            .map(|club| ClubJson::from_club(club, base_url))
            .collect(),
    ))
}

/// Retrieve a single active club by id.
///
/// GET /api/clubs/{id}/
///
/// Soft-deleted clubs are invisible here and resolve to 404.
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown or inactive clubs.
pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClubJson>> {
    let club = ClubRepository::new(state.pool())
        .get_active(ClubId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(ClubJson::from_club(
        &club,
        state.config().base_url_trimmed(),
    )))
}

/// Create a club owned by the authenticated account.
///
/// POST /api/clubs/
///
/// Notifies the creator's registered email and, when a staff recipient list
/// is configured, the staff list. Both sends are best-effort and never fail
/// the request.
///
/// # Errors
///
/// Returns `AppError::Validation` with a per-field error map for missing or
/// blank fields.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
    Json(payload): Json<CreateClubPayload>,
) -> Result<(StatusCode, Json<ClubJson>)> {
    let new_club = validate_create(payload).map_err(AppError::Validation)?;

    let club = ClubRepository::new(state.pool())
        .create(actor.id, &new_club)
        .await?;

    if let Some(email) = &actor.email {
        notifications::send_best_effort(
            state.mailer(),
            notifications::club_created(&actor, email.as_str()),
        )
        .await;
    }

    let staff_emails = &state.config().staff_emails;
    if !staff_emails.is_empty() {
        notifications::send_best_effort(
            state.mailer(),
            notifications::club_created_staff(&actor, &club, staff_emails),
        )
        .await;
    }

    Ok((
        StatusCode::CREATED,
        Json(ClubJson::from_club(&club, state.config().base_url_trimmed())),
    ))
}

/// Update a club. Owner only; partial and full updates share this handler.
///
/// PATCH/PUT /api/clubs/{id}/
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown or inactive clubs,
/// `AppError::Forbidden` for non-owners, and `AppError::Validation` for
/// blank fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RequireAuth(actor): RequireAuth,
    Json(payload): Json<UpdateClubPayload>,
) -> Result<Json<ClubJson>> {
    let repo = ClubRepository::new(state.pool());
    let mut club = repo
        .get_active(ClubId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;

    if !can_write(&actor, &club) {
        return Err(AppError::Forbidden);
    }

    apply_update(&mut club, payload).map_err(AppError::Validation)?;
    repo.update(&club).await?;

    Ok(Json(ClubJson::from_club(
        &club,
        state.config().base_url_trimmed(),
    )))
}

/// Soft-delete a club. Owner only.
///
/// DELETE /api/clubs/{id}/
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown or inactive clubs and
/// `AppError::Forbidden` for non-owners.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RequireAuth(actor): RequireAuth,
) -> Result<StatusCode> {
    let repo = ClubRepository::new(state.pool());
    let club = repo
        .get_active(ClubId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;

    if !can_write(&actor, &club) {
        return Err(AppError::Forbidden);
    }

    repo.soft_delete(club.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use secrecy::SecretString;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;
    use tower_http::normalize_path::NormalizePath;

    use clubdesk_core::ClubId;

    use crate::config::{ApiConfig, DEFAULT_VERIFIER_URL};
    use crate::db::{AccountRepository, ClubRepository, MIGRATOR};
    use crate::models::NewClub;
    use crate::routes;
    use crate::services::StaticVerifier;
    use crate::services::mailer::RecordingMailer;
    use crate::state::AppState;

    struct TestBackend {
        app: NormalizePath<Router>,
        pool: SqlitePool,
        mailer: Arc<RecordingMailer>,
        user1_token: String,
        user2_token: String,
    }

    fn test_config(staff_emails: Vec<String>) -> ApiConfig {
        ApiConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://testserver".to_owned(),
            mail_from: "clubs@example.org".to_owned(),
            staff_emails,
            persona_origins: vec!["http://example.org".to_owned()],
            debug: false,
            verifier_url: DEFAULT_VERIFIER_URL.to_owned(),
            mail_api: None,
            sentry_dsn: None,
        }
    }

    /// Seeds user1 (no email) owning club 1, and user2 (with email).
    async fn test_backend(staff_emails: Vec<String>) -> TestBackend {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MIGRATOR.run(&pool).await.unwrap();

        let accounts = AccountRepository::new(&pool);
        let user1 = accounts.create("user1", None).await.unwrap();
        let user2 = accounts
            .create("user2", Some(&"user2@example.org".parse().unwrap()))
            .await
            .unwrap();
        let user1_token = accounts.get_or_create_token(user1.id).await.unwrap();
        let user2_token = accounts.get_or_create_token(user2.id).await.unwrap();

        ClubRepository::new(&pool)
            .create(
                user1.id,
                &NewClub {
                    name: "my club".to_owned(),
                    website: "http://myclub.org/".to_owned(),
                    description: "This is my club.".to_owned(),
                    location: "Somewhere".to_owned(),
                    latitude: 5.0,
                    longitude: 6.0,
                },
            )
            .await
            .unwrap();

        let mailer = Arc::new(RecordingMailer::default());
        let state = AppState::new(
            test_config(staff_emails),
            pool.clone(),
            mailer.clone(),
            Arc::new(StaticVerifier::new(None)),
        );

        TestBackend {
            app: routes::app(state),
            pool,
            mailer,
            user1_token,
            user2_token,
        }
    }

    fn request(
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn call(backend: &TestBackend, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = backend.app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn call_json(backend: &TestBackend, req: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = call(backend, req).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn create_payload() -> Value {
        json!({
            "name": "my club2",
            "website": "http://myclub2.org/",
            "description": "This is my club2.",
            "location": "Somewhere else",
            "latitude": 1.0,
            "longitude": 2.0
        })
    }

    async fn create_club(backend: &TestBackend) -> (StatusCode, Value) {
        let req = request(
            Method::POST,
            "/api/clubs/",
            Some(&backend.user2_token),
            Some(create_payload()),
        );
        call_json(backend, req).await
    }

    #[tokio::test]
    async fn test_list_clubs_works() {
        let backend = test_backend(vec![]).await;
        let (status, body) =
            call_json(&backend, request(Method::GET, "/api/clubs/", None, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "url": "http://testserver/api/clubs/1/",
                "owner": "user1",
                "name": "my club",
                "website": "http://myclub.org/",
                "description": "This is my club.",
                "location": "Somewhere",
                "latitude": 5.0,
                "longitude": 6.0
            }])
        );
    }

    #[tokio::test]
    async fn test_create_clubs_sets_owner() {
        let backend = test_backend(vec![]).await;
        let (status, body) = create_club(&backend).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["url"], "http://testserver/api/clubs/2/");
        assert_eq!(body["owner"], "user2");

        let club = ClubRepository::new(&backend.pool)
            .get(ClubId::new(2))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(club.owner_username, "user2");
    }

    #[tokio::test]
    async fn test_create_clubs_ignores_client_owner_field() {
        let backend = test_backend(vec![]).await;
        let mut payload = create_payload();
        payload["owner"] = json!("user1");

        let req = request(
            Method::POST,
            "/api/clubs/",
            Some(&backend.user2_token),
            Some(payload),
        );
        let (status, body) = call_json(&backend, req).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["owner"], "user2");
    }

    #[tokio::test]
    async fn test_create_clubs_requires_auth() {
        let backend = test_backend(vec![]).await;
        let req = request(Method::POST, "/api/clubs/", None, Some(create_payload()));
        let (status, _) = call(&backend, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            ClubRepository::new(&backend.pool)
                .list_active()
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_create_clubs_validates_required_fields() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::POST,
            "/api/clubs/",
            Some(&backend.user2_token),
            Some(json!({})),
        );
        let (status, body) = call_json(&backend, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        for field in [
            "name",
            "website",
            "description",
            "location",
            "latitude",
            "longitude",
        ] {
            assert_eq!(body[field], json!(["this field is required"]), "{field}");
        }
    }

    #[tokio::test]
    async fn test_create_clubs_rejects_blank_fields() {
        let backend = test_backend(vec![]).await;
        let mut payload = create_payload();
        payload["name"] = json!("   ");

        let req = request(
            Method::POST,
            "/api/clubs/",
            Some(&backend.user2_token),
            Some(payload),
        );
        let (status, body) = call_json(&backend, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"], json!(["this field may not be blank"]));
    }

    #[tokio::test]
    async fn test_create_clubs_sends_email_to_creator() {
        let backend = test_backend(vec![]).await;
        let (status, _) = create_club(&backend).await;
        assert_eq!(status, StatusCode::CREATED);

        let sent = backend.mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, vec!["user2@example.org"]);
        assert!(sent[0].body.contains("user2"));
    }

    #[tokio::test]
    async fn test_create_clubs_sends_email_to_staff() {
        let backend = test_backend(vec!["foo@bar.org".to_owned()]).await;
        let (status, _) = create_club(&backend).await;
        assert_eq!(status, StatusCode::CREATED);

        let sent = backend.mailer.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].to, vec!["foo@bar.org"]);
        assert!(sent[1].body.contains("user2@example.org"));
        assert!(sent[1].body.contains("my club2"));
    }

    #[tokio::test]
    async fn test_create_by_account_without_email_skips_creator_mail() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::POST,
            "/api/clubs/",
            Some(&backend.user1_token),
            Some(create_payload()),
        );
        let (status, _) = call(&backend, req).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(backend.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_list_clubs_only_shows_active_clubs() {
        let backend = test_backend(vec![]).await;
        ClubRepository::new(&backend.pool)
            .soft_delete(ClubId::new(1))
            .await
            .unwrap();

        let (status, body) =
            call_json(&backend, request(Method::GET, "/api/clubs/", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_retrieve_club_works() {
        let backend = test_backend(vec![]).await;
        let (status, body) =
            call_json(&backend, request(Method::GET, "/api/clubs/1/", None, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "my club");
        assert_eq!(body["owner"], "user1");
    }

    #[tokio::test]
    async fn test_retrieve_inactive_club_is_not_found() {
        let backend = test_backend(vec![]).await;
        ClubRepository::new(&backend.pool)
            .soft_delete(ClubId::new(1))
            .await
            .unwrap();

        let (status, _) = call(&backend, request(Method::GET, "/api/clubs/1/", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_retrieve_unknown_club_is_not_found() {
        let backend = test_backend(vec![]).await;
        let (status, _) =
            call(&backend, request(Method::GET, "/api/clubs/99/", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_patch_clubs_without_auth_fails() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::PATCH,
            "/api/clubs/1/",
            None,
            Some(json!({"name": "u"})),
        );
        let (status, _) = call(&backend, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        let club = ClubRepository::new(&backend.pool)
            .get(ClubId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(club.name, "my club");
    }

    #[tokio::test]
    async fn test_patch_clubs_with_auth_from_non_owner_fails() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::PATCH,
            "/api/clubs/1/",
            Some(&backend.user2_token),
            Some(json!({"name": "u"})),
        );
        let (status, _) = call(&backend, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        let club = ClubRepository::new(&backend.pool)
            .get(ClubId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(club.name, "my club");
    }

    #[tokio::test]
    async fn test_patch_clubs_with_auth_from_owner_works() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::PATCH,
            "/api/clubs/1/",
            Some(&backend.user1_token),
            Some(json!({"name": "u"})),
        );
        let (status, body) = call_json(&backend, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "u");
        let club = ClubRepository::new(&backend.pool)
            .get(ClubId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(club.name, "u");
    }

    #[tokio::test]
    async fn test_put_clubs_replaces_all_fields() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::PUT,
            "/api/clubs/1/",
            Some(&backend.user1_token),
            Some(create_payload()),
        );
        let (status, body) = call_json(&backend, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "my club2");
        assert_eq!(body["latitude"], json!(1.0));
        // The owner never changes through an update
        assert_eq!(body["owner"], "user1");
    }

    #[tokio::test]
    async fn test_patch_clubs_rejects_blank_name() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::PATCH,
            "/api/clubs/1/",
            Some(&backend.user1_token),
            Some(json!({"name": ""})),
        );
        let (status, body) = call_json(&backend, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"], json!(["this field may not be blank"]));
    }

    #[tokio::test]
    async fn test_delete_clubs_marks_as_inactive() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::DELETE,
            "/api/clubs/1/",
            Some(&backend.user1_token),
            None,
        );
        let (status, body) = call(&backend, req).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        // Record survives, just inactive
        let club = ClubRepository::new(&backend.pool)
            .get(ClubId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert!(!club.is_active);

        let (status, listed) =
            call_json(&backend, request(Method::GET, "/api/clubs/", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_delete_clubs_from_non_owner_fails() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::DELETE,
            "/api/clubs/1/",
            Some(&backend.user2_token),
            None,
        );
        let (status, _) = call(&backend, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        let club = ClubRepository::new(&backend.pool)
            .get(ClubId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert!(club.is_active);
    }

    #[tokio::test]
    async fn test_write_to_unknown_club_is_not_found() {
        let backend = test_backend(vec![]).await;
        let req = request(
            Method::PATCH,
            "/api/clubs/99/",
            Some(&backend.user1_token),
            Some(json!({"name": "u"})),
        );
        let (status, _) = call(&backend, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_paths_have_cors_enabled() {
        let backend = test_backend(vec![]).await;
        let req = Request::builder()
            .method(Method::GET)
            .uri("/api/clubs/")
            .header(header::ORIGIN, "http://foo.org")
            .body(Body::empty())
            .unwrap();

        let response = backend.app.clone().oneshot(req).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_non_api_paths_have_cors_disabled() {
        let backend = test_backend(vec![]).await;
        let req = Request::builder()
            .method(Method::GET)
            .uri("/health")
            .header(header::ORIGIN, "http://foo.org")
            .body(Body::empty())
            .unwrap();

        let response = backend.app.clone().oneshot(req).await.unwrap();
        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
