//! Login/logout command handlers.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use giveaway_core::auth::{Session, SessionStore};

pub fn login(key: Option<String>) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => read_key_from_stdin()?,
    };
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Session key cannot be empty");
    }

    let store = SessionStore::default();
    store
        .save(&Session::for_key(key))
        .context("save session")?;
    println!("Logged in. Session saved to {}", store.path().display());
    Ok(())
}

pub fn logout() -> Result<()> {
    let store = SessionStore::default();
    if store.clear().context("remove session")? {
        println!("Logged out.");
    } else {
        println!("No session to remove.");
    }
    Ok(())
}

fn read_key_from_stdin() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Session key: ");
        io::stderr().flush()?;
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("read session key from stdin")?;
    Ok(line)
}
