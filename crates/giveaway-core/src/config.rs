//! Configuration management for the giveaway page.
//!
//! Loads configuration from ${GIVEAWAY_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable that overrides `base_url`.
pub const BASE_URL_ENV: &str = "GIVEAWAY_BASE_URL";

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for giveaway configuration and data directories.
    //!
    //! GIVEAWAY_HOME resolution order:
    //! 1. GIVEAWAY_HOME environment variable (if set)
    //! 2. ~/.config/giveaway (default)
    //! 3. ./.giveaway when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the giveaway home directory.
    pub fn giveaway_home() -> PathBuf {
        if let Ok(home) = std::env::var("GIVEAWAY_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".giveaway"),
            |h| h.join(".config").join("giveaway"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        giveaway_home().join("config.toml")
    }

    /// Returns the path to the session file written by `giveaway login`.
    pub fn session_path() -> PathBuf {
        giveaway_home().join("session.json")
    }

    /// Returns the directory that holds log files.
    pub fn logs_dir() -> PathBuf {
        giveaway_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the saphira service
    pub base_url: Option<String>,

    /// Title shown in the page header
    pub title: String,

    /// Pause before a draw request is sent, in milliseconds
    pub draw_delay_ms: u64,

    /// Timeout for saphira requests in seconds (0 disables)
    pub request_timeout_secs: u32,
}

impl Config {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
    const DEFAULT_TITLE: &str = "CO SSI 2022 | Sorteio";
    const DEFAULT_DRAW_DELAY_MS: u64 = 2000;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Pacing delay applied before each draw request.
    pub fn draw_delay(&self) -> Duration {
        Duration::from_millis(self.draw_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    /// Returns the saphira base URL with precedence: env > config > default.
    ///
    /// # Errors
    /// Returns an error if the selected value is not a valid base URL.
    pub fn base_url(&self) -> Result<Url> {
        let env_value = std::env::var(BASE_URL_ENV).ok();
        resolve_base_url(env_value.as_deref(), self.base_url.as_deref())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            title: Self::DEFAULT_TITLE.to_string(),
            draw_delay_ms: Self::DEFAULT_DRAW_DELAY_MS,
            request_timeout_secs: 0,
        }
    }
}

/// Picks the first non-blank candidate (env, then config) or the default.
fn resolve_base_url(env_value: Option<&str>, config_value: Option<&str>) -> Result<Url> {
    let chosen = [env_value, config_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(Config::DEFAULT_BASE_URL);

    let url = Url::parse(chosen).with_context(|| format!("Invalid saphira base URL: {chosen}"))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("Invalid saphira base URL: {chosen}");
    }
    Ok(url)
}
