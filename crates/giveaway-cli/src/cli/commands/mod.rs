//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod draw;
pub mod lectures;
pub mod page;

use anyhow::Result;
use giveaway_core::auth::{Access, AuthKey, SessionStore};

/// Runs the same gate the page uses and returns the key to send.
///
/// # Errors
/// Fails when the stored session is missing or not authorized.
fn require_authorized() -> Result<AuthKey> {
    let session = SessionStore::default().load()?;
    match Access::evaluate(session.as_ref()) {
        Access::Authorized(key) => Ok(key),
        Access::Unauthorized => anyhow::bail!("Not logged in. Run `giveaway login` first."),
    }
}
