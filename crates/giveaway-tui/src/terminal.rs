//! Terminal lifecycle management.
//!
//! Terminal state is restored on normal exit (via the runtime's `Drop`) and
//! on panic (via the hook installed here). Ctrl+C arrives as a key event in
//! raw mode and goes through the reducer like any other quit key.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Enables raw mode, enters the alternate screen and creates the terminal.
///
/// Call `install_panic_hook()` first.
///
/// # Errors
/// Returns an error if the terminal cannot be configured.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let terminal = undo_on_error(enter_alternate_screen(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;
    Ok(terminal)
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Runs `undo` when `result` is an error, so a half-finished setup does not
/// leave the terminal in raw mode.
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Leaves the alternate screen and disables raw mode. Idempotent.
///
/// # Errors
/// Returns an error if the terminal cannot be restored.
pub fn restore_terminal() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
