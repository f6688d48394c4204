//! Mail transport for notification emails.
//!
//! Sends are best-effort everywhere: call sites log failures and move on, so
//! a broken relay never fails a request.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;

use crate::config::MailApiConfig;

/// Errors that can occur when sending mail.
#[derive(Debug, Error)]
pub enum MailError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Relay returned an error response.
    #[error("relay error: {status} - {message}")]
    Relay { status: u16, message: String },

    /// Client configuration was invalid.
    #[error("mailer configuration error: {0}")]
    Config(String),
}

/// An outgoing notification email.
///
/// The from address is supplied by the transport, not the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Mail-sending capability.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one email.
    ///
    /// # Errors
    ///
    /// Returns `MailError` if the message could not be handed to the
    /// transport. Callers treat this as non-fatal.
    async fn send(&self, mail: &OutgoingEmail) -> Result<(), MailError>;
}

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    body: &'a str,
}

/// Mailer posting JSON messages to an HTTP mail relay.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    url: String,
    from: String,
}

impl HttpMailer {
    /// Create a new HTTP relay mailer.
    ///
    /// # Errors
    ///
    /// Returns `MailError::Config` if the HTTP client fails to build or the
    /// configured API key is not a valid header value.
    pub fn new(config: &MailApiConfig, from: &str) -> Result<Self, MailError> {
        let mut headers = reqwest::header::HeaderMap::new();

        if let Some(api_key) = &config.api_key {
            let auth_value = format!("Bearer {}", api_key.expose_secret());
            let mut value = reqwest::header::HeaderValue::from_str(&auth_value)
                .map_err(|e| MailError::Config(format!("invalid API key format: {e}")))?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| MailError::Config(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            from: from.to_owned(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, mail: &OutgoingEmail) -> Result<(), MailError> {
        let message = RelayMessage {
            from: &self.from,
            to: &mail.to,
            subject: &mail.subject,
            body: &mail.body,
        };

        let response = self.client.post(&self.url).json(&message).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailError::Relay {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

/// Mailer installed when no relay is configured: logs and drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, mail: &OutgoingEmail) -> Result<(), MailError> {
        tracing::debug!(
            to = ?mail.to,
            subject = %mail.subject,
            "no mail relay configured, dropping notification"
        );
        Ok(())
    }
}

/// Mailer recording every message for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: std::sync::Mutex<Vec<OutgoingEmail>>,
}

#[cfg(test)]
impl RecordingMailer {
    /// Messages sent so far, in order.
    #[allow(clippy::unwrap_used)]
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl Mailer for RecordingMailer {
    #[allow(clippy::unwrap_used)]
    async fn send(&self, mail: &OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}
