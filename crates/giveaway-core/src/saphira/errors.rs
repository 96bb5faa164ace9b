use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Categories of saphira client errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaphiraErrorKind {
    /// Could not reach the service (DNS, refused connection, TLS, ...)
    Connect,
    /// Request timed out
    Timeout,
    /// HTTP status error (4xx, 5xx)
    HttpStatus,
    /// Response body did not have the expected shape
    Parse,
}

impl fmt::Display for SaphiraErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaphiraErrorKind::Connect => write!(f, "connect"),
            SaphiraErrorKind::Timeout => write!(f, "timeout"),
            SaphiraErrorKind::HttpStatus => write!(f, "http_status"),
            SaphiraErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from the saphira service with kind and details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaphiraError {
    /// Error category
    pub kind: SaphiraErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw response body)
    pub details: Option<String>,
}

impl SaphiraError {
    pub fn new(kind: SaphiraErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, lifting `message`/`error` out of a JSON body.
    pub fn http_status(status: u16, body: &str) -> Self {
        let details = (!body.is_empty()).then(|| body.to_string());
        let summary = serde_json::from_str::<Value>(body).ok().and_then(|json| {
            ["message", "error"]
                .iter()
                .find_map(|key| json.get(key).and_then(Value::as_str).map(str::to_string))
        });

        let message = match summary {
            Some(summary) => format!("HTTP {status}: {summary}"),
            None => format!("HTTP {status}"),
        };

        Self {
            kind: SaphiraErrorKind::HttpStatus,
            message,
            details,
        }
    }

    /// Creates a parse error keeping the raw body for the log.
    pub fn parse(message: impl Into<String>, body: &str) -> Self {
        Self {
            kind: SaphiraErrorKind::Parse,
            message: message.into(),
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// Classifies a transport error from reqwest.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(SaphiraErrorKind::Timeout, format!("Request timed out: {err}"))
        } else {
            Self::new(SaphiraErrorKind::Connect, format!("Request failed: {err}"))
        }
    }
}

impl fmt::Display for SaphiraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SaphiraError {}
