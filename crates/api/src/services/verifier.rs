//! Pluggable identity-assertion verifier.
//!
//! A client proves control of an email address by presenting a signed
//! assertion issued by a third party. The verifier checks the assertion
//! against the audience (this service's own origin) and yields the confirmed
//! email address, or a failure reason. Nothing is persisted.

use async_trait::async_trait;
use serde::Deserialize;

/// Outcome of verifying one assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// The assertion checked out for the given email address.
    Verified { email: String },
    /// The assertion could not be verified.
    Failed { reason: String },
}

/// Identity-assertion verification capability.
///
/// Production and test implementations are swapped via constructor injection
/// on `AppState`.
#[async_trait]
pub trait AssertionVerifier: Send + Sync {
    /// Verify `assertion` against `audience`.
    async fn verify(&self, assertion: &str, audience: &str) -> VerificationResult;
}

/// Wire response of the remote verifier.
#[derive(Debug, Deserialize)]
struct VerifierResponse {
    status: String,
    email: Option<String>,
    reason: Option<String>,
}

/// Verifier delegating to a remote Persona-compatible verification service.
#[derive(Clone)]
pub struct PersonaVerifier {
    client: reqwest::Client,
    verifier_url: String,
}

impl PersonaVerifier {
    /// Create a verifier posting to the given endpoint.
    #[must_use]
    pub fn new(verifier_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            verifier_url: verifier_url.to_owned(),
        }
    }
}

#[async_trait]
impl AssertionVerifier for PersonaVerifier {
    async fn verify(&self, assertion: &str, audience: &str) -> VerificationResult {
        let params = [("assertion", assertion), ("audience", audience)];

        let response = match self
            .client
            .post(&self.verifier_url)
            .form(&params)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return VerificationResult::Failed {
                    reason: format!("verifier unreachable: {e}"),
                };
            }
        };

        let parsed: VerifierResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                return VerificationResult::Failed {
                    reason: format!("unparseable verifier response: {e}"),
                };
            }
        };

        match (parsed.status.as_str(), parsed.email) {
            ("okay", Some(email)) => VerificationResult::Verified { email },
            ("okay", None) => VerificationResult::Failed {
                reason: "verifier returned no email".to_owned(),
            },
            _ => VerificationResult::Failed {
                reason: parsed
                    .reason
                    .unwrap_or_else(|| "verification failed".to_owned()),
            },
        }
    }
}

/// Fixed-outcome verifier for tests and local development.
///
/// `Some(email)` verifies every assertion as that address; `None` fails every
/// assertion.
#[derive(Debug, Clone)]
pub struct StaticVerifier {
    email: Option<String>,
}

impl StaticVerifier {
    /// Create a verifier with a fixed outcome.
    #[must_use]
    pub fn new(email: Option<&str>) -> Self {
        Self {
            email: email.map(ToOwned::to_owned),
        }
    }
}

#[async_trait]
impl AssertionVerifier for StaticVerifier {
    async fn verify(&self, _assertion: &str, _audience: &str) -> VerificationResult {
        self.email.as_ref().map_or_else(
            || VerificationResult::Failed {
                reason: "static verifier configured to fail".to_owned(),
            },
            |email| VerificationResult::Verified {
                email: email.clone(),
            },
        )
    }
}
