//! Client construction from command-line options.

use anyhow::{Context, Result};
use docufind_core::config::ApiConfig;
use docufind_core::ApiClient;
use std::time::Duration;

/// Builds the HTTP client for `api_url`.
///
/// `--api-url` falls back to `$DOCUFIND_API_URL` and then to the default
/// local backend (resolved by clap).
pub fn build_client(api_url: &str, timeout_secs: u64, cloud_limit: Option<usize>) -> Result<ApiClient> {
    let mut config = ApiConfig::new(api_url)
        .with_context(|| format!("Invalid API URL '{}'", api_url))?
        .with_timeout(Duration::from_secs(timeout_secs.max(1)));

    if let Some(limit) = cloud_limit {
        config = config.with_cloud_limit(limit);
    }

    ApiClient::new(config).context("Failed to build HTTP client")
}
