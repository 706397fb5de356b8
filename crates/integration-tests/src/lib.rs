//! Integration tests for Arjuna POS.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p arjuna-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Login through checkout to invoice, end to end
//! - `transport_api` - Mock API surface: routes, envelopes, status codes
//! - `state_recovery` - Corrupted/partial persisted state handling
//!
//! Flows run against [`PosState::in_memory`]: an in-memory key-value store
//! and a zero-latency API client, so tests exercise exactly the code a
//! front-end drives without touching the filesystem.

#![cfg_attr(not(test), forbid(unsafe_code))]

use arjuna_pos::error::PosError;
use arjuna_pos::session::Session;
use arjuna_pos::state::PosState;

/// Log a fixture account in and persist the session.
///
/// # Errors
///
/// Returns a [`PosError`] if the login or the session write fails.
pub async fn login_as(state: &PosState, email: &str) -> Result<Session, PosError> {
    let data = state.client().login(email, "123456").await?;
    Ok(state.sessions().save(data.user, data.token)?)
}
