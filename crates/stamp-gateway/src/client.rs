//! Minimal HTTP client for the gateway.
//!
//! Used by the daemon's demo mode and by the acceptance tests.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use stamp_common::{ParseTimestampError, UnixTimestamp};
use thiserror::Error;
use tracing::debug;

/// Client-side failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure talking to the gateway.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("gateway returned {status}: {body}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Response body text.
        body: String,
    },

    /// The GET body was not a timestamp.
    #[error("unexpected response body: {0}")]
    InvalidBody(#[from] ParseTimestampError),
}

/// Convenience type alias for client calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Talks to `/timestamp` on one gateway.
#[derive(Debug, Clone)]
pub struct TimestampClient {
    http: reqwest::Client,
    url: String,
}

impl TimestampClient {
    /// Client for the gateway at `base_url`, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: format!("{}/timestamp", base_url.trim_end_matches('/')),
        }
    }

    /// Full URL of the timestamp resource.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Store `value` on the gateway.
    ///
    /// # Errors
    ///
    /// Transport failures, or any non-success status.
    pub async fn post(&self, value: UnixTimestamp) -> ClientResult<()> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "text/plain")
            .body(value.to_string())
            .send()
            .await?;
        check_status(response).await?;
        debug!(%value, "Timestamp posted");
        Ok(())
    }

    /// Fetch the stored value.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success status, or a body that does not parse.
    pub async fn get(&self) -> ClientResult<UnixTimestamp> {
        let response = self.http.get(&self.url).send().await?;
        let body = check_status(response).await?.text().await?;
        Ok(body.parse::<UnixTimestamp>()?)
    }

    /// Post the current time and read it back.
    ///
    /// # Errors
    ///
    /// Any error from [`post`](Self::post) or [`get`](Self::get).
    pub async fn round_trip(&self) -> ClientResult<UnixTimestamp> {
        self.post(UnixTimestamp::now()).await?;
        self.get().await
    }
}

async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
