//! Session storage and the page authorization gate.
//!
//! The session lives in `$GIVEAWAY_HOME/session.json` with restricted
//! permissions (0600). It carries the opaque key sent to saphira and the
//! session cookie, which must contain the `co-auth` marker.
//!
//! Keys are never logged or displayed in full.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Substring a session cookie must contain to be accepted.
pub const AUTH_COOKIE_MARKER: &str = "co-auth";

/// Opaque session key handed to saphira.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthKey(String);

impl AuthKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthKey({})", redact(&self.0))
    }
}

/// Stored login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session key (may be empty if the file was edited by hand).
    #[serde(default)]
    pub key: String,
    /// Session cookie string, e.g. `co-auth=<key>`.
    #[serde(default)]
    pub cookie: String,
}

impl Session {
    /// Builds the session `giveaway login` writes for a key.
    pub fn for_key(key: impl Into<String>) -> Self {
        let key = key.into();
        let cookie = format!("{AUTH_COOKIE_MARKER}={key}");
        Self { key, cookie }
    }

    fn has_auth_cookie(&self) -> bool {
        self.cookie.contains(AUTH_COOKIE_MARKER)
    }
}

/// Outcome of the authorization gate.
///
/// Protected content is only reachable through `Authorized`, which carries
/// the key needed to talk to saphira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Authorized(AuthKey),
    Unauthorized,
}

impl Access {
    /// Single synchronous check: a non-empty key and a cookie carrying the
    /// `co-auth` marker are both required.
    pub fn evaluate(session: Option<&Session>) -> Self {
        match session {
            Some(session) if !session.key.trim().is_empty() && session.has_auth_cookie() => {
                Access::Authorized(AuthKey(session.key.trim().to_string()))
            }
            _ => Access::Unauthorized,
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, Access::Authorized(_))
    }

    pub fn key(&self) -> Option<&AuthKey> {
        match self {
            Access::Authorized(key) => Some(key),
            Access::Unauthorized => None,
        }
    }
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(paths::session_path())
    }
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the session. Returns `None` if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {}", self.path.display()))?;

        serde_json::from_str(&contents)
            .map(Some)
            .with_context(|| format!("Failed to parse session from {}", self.path.display()))
    }

    /// Saves the session with restricted permissions (0600).
    ///
    /// # Errors
    /// Returns an error if the file or its parent directory cannot be written.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Removes the session file. Returns whether a session existed.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        Ok(true)
    }
}

/// Shows only the first few characters of a secret.
fn redact(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}
