//! Interactive page command.

use anyhow::Result;
use giveaway_core::auth::SessionStore;
use giveaway_core::config::Config;

/// Runs on the caller's thread; see `giveaway_tui::run_giveaway_page`.
pub fn run(config: &Config) -> Result<()> {
    let session = SessionStore::default().load()?;
    giveaway_tui::run_giveaway_page(config, session)
}
