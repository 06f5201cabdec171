//! Error types for docufind-core.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while talking to the search backend.
///
/// `Clone` so a failure can be stored in UI state alongside the data it
/// would have produced.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (connection refused, DNS, CORS, ...)
    #[error("Request failed: {0}")]
    Transport(String),
    /// Backend answered with a non-success status
    #[error("Backend returned {status} for {url}")]
    Status { status: u16, url: String },
    /// Response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// Request exceeded the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// Request was superseded or explicitly cancelled
    #[error("Request cancelled")]
    Cancelled,
    /// Base URL or path could not be turned into a request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// True for cancellations, which are expected and never shown to the user.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// True when the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
