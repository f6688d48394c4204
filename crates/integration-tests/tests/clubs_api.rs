//! Integration tests for the clubs API.
//!
//! These tests require:
//! - A migrated database (cargo run -p clubdesk-cli -- migrate)
//! - The server running (cargo run -p clubdesk-api)
//! - `CLUBDESK_TEST_TOKEN` set to a provisioned account's API token
//!
//! Run with: cargo test -p clubdesk-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("CLUBDESK_TEST_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// API token of a provisioned account, for write-path tests.
fn api_token() -> Option<String> {
    std::env::var("CLUBDESK_TEST_TOKEN").ok()
}

fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

/// Test helper: create a club with a unique name, returning its JSON.
async fn create_test_club(client: &Client, token: &str) -> Value {
    let name = format!("integration test club {}", Uuid::new_v4());
    let resp = client
        .post(format!("{}/api/clubs/", base_url()))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({
            "name": name,
            "website": "http://example.org/",
            "description": "Created by the integration suite.",
            "location": "Nowhere",
            "latitude": 0.0,
            "longitude": 0.0
        }))
        .send()
        .await
        .expect("Failed to create test club");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse created club")
}

// ============================================================================
// Read Path
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running clubdesk-api server"]
async fn test_health_endpoints() {
    let client = client();
    let base = base_url();

    let resp = client.get(format!("{base}/health")).send().await.expect("health failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base}/health/ready"))
        .send()
        .await
        .expect("readiness failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires a running clubdesk-api server"]
async fn test_list_clubs_is_public_and_cors_open() {
    let client = client();

    let resp = client
        .get(format!("{}/api/clubs/", base_url()))
        .header("Origin", "http://foo.org")
        .send()
        .await
        .expect("Failed to list clubs");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let body: Value = resp.json().await.expect("Failed to parse list");
    assert!(body.is_array());
}

// ============================================================================
// Write Path
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running clubdesk-api server and CLUBDESK_TEST_TOKEN"]
async fn test_create_patch_delete_club_roundtrip() {
    let token = api_token().expect("CLUBDESK_TEST_TOKEN not set");
    let client = client();
    let base = base_url();

    let created = create_test_club(&client, &token).await;
    let url = created["url"].as_str().expect("created club has no url");
    assert!(url.starts_with(&base));

    // Patch the name
    let resp = client
        .patch(url)
        .header("Authorization", format!("Token {token}"))
        .json(&json!({"name": "renamed by integration test"}))
        .send()
        .await
        .expect("Failed to patch club");
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: Value = resp.json().await.expect("Failed to parse patched club");
    assert_eq!(patched["name"], "renamed by integration test");

    // Unauthenticated writes are forbidden
    let resp = client
        .patch(url)
        .json(&json!({"name": "should not stick"}))
        .send()
        .await
        .expect("Failed to send unauthenticated patch");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Soft-delete
    let resp = client
        .delete(url)
        .header("Authorization", format!("Token {token}"))
        .send()
        .await
        .expect("Failed to delete club");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone from direct lookup
    let resp = client.get(url).send().await.expect("Failed to re-fetch club");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires a running clubdesk-api server and CLUBDESK_TEST_TOKEN"]
async fn test_create_club_validation_errors() {
    let token = api_token().expect("CLUBDESK_TEST_TOKEN not set");
    let client = client();

    let resp = client
        .post(format!("{}/api/clubs/", base_url()))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({"name": "missing everything else"}))
        .send()
        .await
        .expect("Failed to send invalid create");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert!(body.get("website").is_some());
    assert!(body.get("latitude").is_some());
}

// ============================================================================
// Token Exchange
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running clubdesk-api server"]
async fn test_token_exchange_rejects_unlisted_origin() {
    let client = client();

    let resp = client
        .post(format!("{}/persona/", base_url()))
        .header("Origin", "http://not-whitelisted.example")
        .form(&[("assertion", "foo")])
        .send()
        .await
        .expect("Failed to call token exchange");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(resp.text().await.expect("no body"), "invalid origin");
}

#[tokio::test]
#[ignore = "Requires a running clubdesk-api server with this origin whitelisted"]
async fn test_token_exchange_requires_assertion() {
    let client = client();
    let origin =
        std::env::var("CLUBDESK_TEST_ORIGIN").unwrap_or_else(|_| "http://localhost:8000".to_owned());

    let resp = client
        .post(format!("{}/persona/", base_url()))
        .header("Origin", &origin)
        .send()
        .await
        .expect("Failed to call token exchange");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(origin.as_str())
    );
    assert_eq!(resp.text().await.expect("no body"), "assertion required");
}
