//! External service collaborators.
//!
//! Both the mail transport and the identity-assertion verifier sit behind
//! object-safe traits injected into `AppState`, so production HTTP clients and
//! test doubles swap without touching handler code.

pub mod mailer;
pub mod notifications;
pub mod verifier;

pub use mailer::{HttpMailer, MailError, Mailer, NullMailer, OutgoingEmail};
pub use verifier::{AssertionVerifier, PersonaVerifier, StaticVerifier, VerificationResult};
