//! Production configuration constants and API configuration.
//!
//! # Usage
//!
//! ```
//! use docufind_core::config::{ApiConfig, RESULTS_PER_PAGE};
//!
//! let config = ApiConfig::default();
//! assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
//! assert_eq!(RESULTS_PER_PAGE, 5);
//! ```

use crate::error::ApiError;
use std::time::Duration;
use url::Url;

// =============================================================================
// Backend
// =============================================================================

/// Base URL of the search backend when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend URL.
///
/// Read at runtime on native targets and captured at compile time for WASM
/// builds, where the process environment does not exist.
pub const API_URL_ENV: &str = "DOCUFIND_API_URL";

/// Upper bound for a single backend request.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Search UI
// =============================================================================

/// Results shown per page in the results list.
pub const RESULTS_PER_PAGE: usize = 5;

/// Minimum trimmed query length (in characters) before suggestions are fetched.
pub const SUGGEST_MIN_CHARS: usize = 3;

/// Quiet period after the last keystroke before a suggestion fetch is issued.
pub const SUGGEST_DEBOUNCE_MS: u64 = 300;

// =============================================================================
// Word cloud
// =============================================================================

/// Font size of the least frequent word in the cloud.
pub const CLOUD_MIN_FONT_PX: f64 = 14.0;

/// Font size of the most frequent word in the cloud.
pub const CLOUD_MAX_FONT_PX: f64 = 74.0;

/// Connection settings for the search backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL, always ending in `/` so paths join underneath it.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Optional `limit` passed to the word cloud endpoint (backend default is 40).
    pub cloud_limit: Option<usize>,
}

impl ApiConfig {
    /// Creates a configuration for the given base URL with default timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            cloud_limit: None,
        })
    }

    /// Resolves the backend URL from the environment.
    ///
    /// Search order:
    /// 1. `$DOCUFIND_API_URL` at runtime (native only)
    /// 2. `DOCUFIND_API_URL` captured at compile time
    /// 3. [`DEFAULT_API_URL`]
    pub fn from_env() -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return Self::new(&url);
            }
        }

        match option_env!("DOCUFIND_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cloud_limit(mut self, limit: usize) -> Self {
        self.cloud_limit = Some(limit);
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid base URL"),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            cloud_limit: None,
        }
    }
}

/// Parses a base URL and normalizes it to end with a single `/`.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let mut url =
        Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::InvalidUrl(format!(
            "Unsupported scheme: {} (only http/https allowed)",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(format!("Not a base URL: {}", raw)));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constant() {
        let config = ApiConfig::default();
        assert_eq!(
            config.base_url.as_str().trim_end_matches('/'),
            DEFAULT_API_URL
        );
        assert_eq!(config.timeout, Duration::from_secs(REQUEST_TIMEOUT_SECS));
        assert_eq!(config.cloud_limit, None);
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let a = ApiConfig::new("http://localhost:9000").unwrap();
        let b = ApiConfig::new("http://localhost:9000///").unwrap();
        assert_eq!(a.base_url.as_str(), "http://localhost:9000/");
        assert_eq!(a.base_url, b.base_url);
    }

    #[test]
    fn test_path_prefix_kept() {
        let config = ApiConfig::new("https://example.com/api").unwrap();
        assert_eq!(config.base_url.as_str(), "https://example.com/api/");
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiConfig::new("ftp://example.com"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = ApiConfig::default()
            .with_timeout(Duration::from_secs(2))
            .with_cloud_limit(10);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.cloud_limit, Some(10));
    }

    #[test]
    fn test_ui_constants() {
        assert_eq!(RESULTS_PER_PAGE, 5);
        assert_eq!(SUGGEST_MIN_CHARS, 3);
        assert_eq!(SUGGEST_DEBOUNCE_MS, 300);
        assert_eq!(CLOUD_MAX_FONT_PX - CLOUD_MIN_FONT_PX, 60.0);
    }
}
