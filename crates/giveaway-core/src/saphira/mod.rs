//! HTTP client for the saphira lecture service.
//!
//! Endpoints (relative to the configured base URL):
//! - `GET lectures` → `[{"id": 1, "title": "..."}]`
//! - `GET giveaway/{id}` → `{"nome": "..."}`
//! - `GET giveaway/{id}/presencial` → `{"nome": "..."}`
//!
//! No retries. Requests carry `Authorization: Bearer <key>` when a session
//! key is available.

mod errors;
mod types;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

pub use errors::{SaphiraError, SaphiraErrorKind};
pub use types::{DrawMode, DrawRequest, GiveawayResult, Lecture, sort_lectures_desc};

use crate::auth::AuthKey;
use crate::config::Config;

/// Standard User-Agent header for saphira requests.
pub const USER_AGENT: &str = concat!("giveaway/", env!("CARGO_PKG_VERSION"));

const LECTURES_SEGMENT: &str = "lectures";
const GIVEAWAY_SEGMENT: &str = "giveaway";
const PRESENCIAL_SEGMENT: &str = "presencial";

/// Saphira client configuration.
#[derive(Debug, Clone)]
pub struct SaphiraConfig {
    pub base_url: Url,
    pub auth_key: Option<AuthKey>,
    pub timeout: Option<Duration>,
}

impl SaphiraConfig {
    /// Builds the client config from the loaded app config.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn from_config(config: &Config, auth_key: Option<AuthKey>) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url()?,
            auth_key,
            timeout: config.request_timeout(),
        })
    }
}

/// Saphira API client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SaphiraClient {
    config: SaphiraConfig,
    http: reqwest::Client,
}

impl SaphiraClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: SaphiraConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { config, http })
    }

    /// Lists all lectures, in whatever order the service returns them.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status or unexpected body.
    pub async fn get_lectures(&self) -> Result<Vec<Lecture>, SaphiraError> {
        self.get_json(self.endpoint(&[LECTURES_SEGMENT])).await
    }

    /// Draws a winner among all attendees of a lecture.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status or unexpected body.
    pub async fn get_giveaway_result(
        &self,
        lecture_id: &str,
    ) -> Result<GiveawayResult, SaphiraError> {
        self.get_json(self.endpoint(&[GIVEAWAY_SEGMENT, lecture_id]))
            .await
    }

    /// Draws a winner among attendees registered as physically present.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status or unexpected body.
    pub async fn get_presencial_only_giveaway_result(
        &self,
        lecture_id: &str,
    ) -> Result<GiveawayResult, SaphiraError> {
        self.get_json(self.endpoint(&[GIVEAWAY_SEGMENT, lecture_id, PRESENCIAL_SEGMENT]))
            .await
    }

    /// Issues exactly one of the two draw calls, picked by the request mode.
    ///
    /// # Errors
    /// Returns the error of the selected draw call.
    pub async fn draw(&self, request: &DrawRequest) -> Result<GiveawayResult, SaphiraError> {
        match request.mode {
            DrawMode::General => self.get_giveaway_result(&request.lecture_id).await,
            DrawMode::PresencialOnly => {
                self.get_presencial_only_giveaway_result(&request.lecture_id)
                    .await
            }
        }
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.config.base_url.clone();
        // base_url is checked to be a base URL when the config is resolved
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SaphiraError> {
        let path = url.path().to_string();
        debug!(%path, "saphira request");

        let mut request = self.http.get(url).header(ACCEPT, "application/json");
        if let Some(key) = &self.config.auth_key {
            request = request.bearer_auth(key.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| SaphiraError::from_transport(&e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SaphiraError::from_transport(&e))?;

        if !status.is_success() {
            return Err(SaphiraError::http_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| SaphiraError::parse(format!("Unexpected response from {path}: {e}"), &body))
    }
}
