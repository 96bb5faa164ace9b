//! Full-screen giveaway page.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr, stdout};

use anyhow::Result;
use giveaway_core::auth::{Access, Session};
use giveaway_core::config::Config;
use giveaway_core::saphira::{SaphiraClient, SaphiraConfig};
pub use runtime::TuiRuntime;
use state::{AppState, PageConfig, Route};

/// Runs the giveaway page until the user quits.
///
/// The session decides access: without an authorized session the page only
/// shows the home notice and no request is sent.
///
/// Blocks the calling thread in the terminal event loop. It must run inside
/// a multi-threaded tokio runtime context, whose worker threads execute the
/// spawned requests.
pub fn run_giveaway_page(config: &Config, session: Option<Session>) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The giveaway page requires a terminal.\n\
             Use `giveaway lectures` or `giveaway draw <ID>` for non-interactive use."
        );
    }

    let access = Access::evaluate(session.as_ref());
    let client = SaphiraClient::new(SaphiraConfig::from_config(
        config,
        access.key().cloned(),
    )?)?;
    let state = AppState::new(PageConfig::from_config(config), access);

    let mut runtime = TuiRuntime::new(state, client)?;
    runtime.run()?;
    let route = runtime.state.route;
    drop(runtime);

    if route == Route::Home {
        writeln!(stderr(), "Not logged in. Run `giveaway login` first.")?;
    }
    Ok(())
}
