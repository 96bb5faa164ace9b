//! File-based tracing setup.
//!
//! The page takes over the terminal, so log output goes to
//! `$GIVEAWAY_HOME/logs/giveaway.log` instead of stdout/stderr.
//! The filter comes from `GIVEAWAY_LOG` (same syntax as `RUST_LOG`),
//! falling back to `info`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "GIVEAWAY_LOG";

/// Log file name inside the logs directory.
pub const LOG_FILE: &str = "giveaway.log";

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to `dir/giveaway.log`.
///
/// The returned guard flushes buffered lines when dropped, so callers keep
/// it alive for the whole process.
///
/// # Errors
/// Returns an error if the directory cannot be created or a global
/// subscriber is already installed.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
