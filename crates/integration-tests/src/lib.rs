//! Integration tests for Clubdesk.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare a database and start the server
//! cargo run -p clubdesk-cli -- migrate
//! cargo run -p clubdesk-api
//!
//! # Run integration tests (ignored by default)
//! cargo test -p clubdesk-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `CLUBDESK_TEST_BASE_URL` - Base URL of the running server
//!   (default: `http://localhost:3000`)
//! - `CLUBDESK_TEST_TOKEN` - API token of a provisioned account, used by the
//!   write-path tests (`clubdesk-cli account token -u <user>`)
//!
//! # Test Categories
//!
//! - `clubs_api` - CRUD over `/api/clubs/` against a live server
//! - `token_exchange` - `/persona/` origin and assertion handling
