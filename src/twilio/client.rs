//! HTTP client for the Twilio REST API
//!
//! Handles authentication and error mapping; resource-specific calls live
//! in sibling modules.

use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, instrument};

use super::types::ApiErrorBody;
use crate::config::{Config, SecretString};

const USER_AGENT: &str = concat!("twilio-call-reporter/", env!("CARGO_PKG_VERSION"));

/// Client for one Twilio account
pub struct TwilioClient {
    http_client: Client,
    base_url: String,
    account_sid: SecretString,
    auth_token: SecretString,
    pub(super) page_size: u32,
}

/// Errors of the Twilio client
#[derive(Debug, Error)]
pub enum TwilioError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication rejected: status {0}")]
    Unauthorized(u16),

    #[error("HTTP error: status {0}: {1}")]
    HttpError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Timeout: request did not complete in time")]
    Timeout,
}

impl TwilioError {
    /// The request could not reach the account: bad credentials or a
    /// transport that never got an answer.
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, TwilioError::Connection(_) | TwilioError::Unauthorized(_))
    }
}

impl TwilioClient {
    /// Creates a client. No request is sent until a resource is read.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root (e.g. "https://api.twilio.com")
    /// * `account_sid` / `auth_token` - Basic auth credentials
    /// * `page_size` - Records requested per page
    /// * `timeout` - Per-request timeout; `None` keeps the HTTP client default
    pub fn new(
        base_url: &str,
        account_sid: SecretString,
        auth_token: SecretString,
        page_size: u32,
        timeout: Option<Duration>,
    ) -> Result<Self, TwilioError> {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| TwilioError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            account_sid,
            auth_token,
            page_size,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, TwilioError> {
        Self::new(
            &config.api_base_url,
            config.account_sid.clone(),
            config.auth_token.clone(),
            config.page_size,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn account_sid(&self) -> &str {
        self.account_sid.expose()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turns a path returned by the API (e.g. `next_page_uri`) into a full URL.
    pub(super) fn resolve(&self, uri: &str) -> String {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            uri.to_string()
        } else if uri.starts_with('/') {
            format!("{}{}", self.base_url, uri)
        } else {
            format!("{}/{}", self.base_url, uri)
        }
    }

    /// Performs an authenticated GET and decodes the JSON body.
    #[instrument(skip(self))]
    pub async fn get<R>(&self, url: &str) -> Result<R, TwilioError>
    where
        R: DeserializeOwned,
    {
        debug!("Twilio request: GET {}", url);

        let response = self
            .http_client
            .get(url)
            .basic_auth(self.account_sid.expose(), Some(self.auth_token.expose()))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TwilioError::Timeout
                } else {
                    TwilioError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TwilioError::Timeout
            } else {
                TwilioError::ParseError(format!("Failed to read response body: {}", e))
            }
        })?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!("Twilio rejected the credentials: status={}", status);
            return Err(TwilioError::Unauthorized(status.as_u16()));
        }

        if !status.is_success() {
            let details: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            error!("Twilio HTTP error: status={}, {}", status, details.describe());
            return Err(TwilioError::HttpError(status.as_u16(), details.describe()));
        }

        serde_json::from_str(&body).map_err(|e| {
            TwilioError::ParseError(format!("Failed to parse JSON: {} - Body: {}", e, body))
        })
    }
}
