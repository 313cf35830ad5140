use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ProfileContext, SessionContext};

/// Error type for submission and profile-read operations.
///
/// The flow stays on its current screen on any of these; recovery is
/// re-running the whole submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with something other than the expected status.
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(StatusCode),

    /// The response body did not decode into the expected shape.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The owning flow was dismissed while the request was in flight.
    #[error("Submission cancelled")]
    Cancelled,

    /// Failure specific to a non-HTTP [`Submitter`] implementation.
    #[error("Submission backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SubmitError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// Delivers a compiled payload to the flow's submission endpoint.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &Value) -> Result<(), SubmitError>;
}

/// Fetches external profile context ahead of payload compilation.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self) -> Result<ProfileContext, SubmitError>;
}

/// POSTs payloads to a flow-specific path under the session's base URL.
///
/// Success is exactly the configured expected status (200 by default, 201
/// for flows whose endpoint creates a record); anything else is a failure,
/// same as a transport error.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: Client,
    context: SessionContext,
    path: String,
    expected_status: StatusCode,
}

impl HttpSubmitter {
    /// Create a submitter for the given session and endpoint path.
    pub fn new(context: SessionContext, path: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            context,
            path: path.into(),
            expected_status: StatusCode::OK,
        }
    }

    /// Override the status code that signals success.
    #[must_use]
    pub fn with_expected_status(mut self, status: StatusCode) -> Self {
        self.expected_status = status;
        self
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &Value) -> Result<(), SubmitError> {
        let url = self.context.url(&self.path);
        let mut request = self.client.post(&url).json(payload);
        if let Some(token) = self.context.bearer_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if status != self.expected_status {
            warn!(%url, %status, "submission rejected");
            return Err(SubmitError::UnexpectedStatus(status));
        }
        debug!(%url, "submission accepted");
        Ok(())
    }
}

/// GETs the profile record and decodes it into a [`ProfileContext`].
#[derive(Debug, Clone)]
pub struct HttpProfileReader {
    client: Client,
    context: SessionContext,
    path: String,
}

impl HttpProfileReader {
    /// Create a reader for the given session and endpoint path.
    pub fn new(context: SessionContext, path: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            context,
            path: path.into(),
        }
    }
}

#[async_trait]
impl ProfileSource for HttpProfileReader {
    async fn fetch(&self) -> Result<ProfileContext, SubmitError> {
        let url = self.context.url(&self.path);
        let mut request = self.client.get(&url);
        if let Some(token) = self.context.bearer_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "profile read rejected");
            return Err(SubmitError::UnexpectedStatus(status));
        }
        let body = response.text().await?;
        let profile = serde_json::from_str(&body)?;
        debug!(%url, "profile read succeeded");
        Ok(profile)
    }
}
