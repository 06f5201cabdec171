//! HTTP implementation of [`SearchBackend`].
//!
//! `reqwest` works on both native and WASM targets:
//! - Native: hyper with rustls for HTTPS, pooled connections
//! - WASM: the browser `fetch()` API
//!
//! Timeouts are applied by racing each request against a platform timer
//! rather than through `reqwest`'s builder, which does not support them on
//! every target.

use super::types::{
    CloudWord, Document, HealthStatus, SearchResponse, SuggestResponse, WordCloudResponse,
};
use super::SearchBackend;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::request::with_timeout;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Client for the DocuFind search backend.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool internally.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

/// Clients are interchangeable when they talk to the same backend.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: build_http_client()?,
            config,
        })
    }

    /// Client configured from `DOCUFIND_API_URL` or the default URL.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Builds `<base>/<segment>/<segment>...`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("Not a base URL: {}", self.config.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GETs `url` and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let request = async {
            let response = self.http.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        };
        with_timeout(self.config.timeout, request).await
    }
}

#[async_trait::async_trait(?Send)]
impl SearchBackend for ApiClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        let mut url = self.endpoint(&["search"])?;
        url.query_pairs_mut().append_pair("query", query);
        self.get_json(url).await
    }

    async fn suggest(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(&["suggest", query])?;
        let response: SuggestResponse = self.get_json(url).await?;
        Ok(response.suggestions)
    }

    async fn document(&self, filename: &str) -> Result<Option<Document>, ApiError> {
        let url = self.endpoint(&["document", filename])?;
        match self.get_json::<Option<Document>>(url).await {
            Ok(doc) => Ok(doc),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn word_cloud(&self, filename: &str) -> Result<Vec<CloudWord>, ApiError> {
        let mut url = self.endpoint(&["cloud", filename])?;
        if let Some(limit) = self.config.cloud_limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        let response: WordCloudResponse = self.get_json(url).await?;
        Ok(response.top_words)
    }

    async fn ping(&self) -> Result<HealthStatus, ApiError> {
        let url = self.endpoint(&["ping"])?;
        self.get_json(url).await
    }

    fn raw_file_url(&self, filename: &str) -> String {
        match self.endpoint(&["raw", filename]) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}raw/{}", self.config.base_url, filename),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .user_agent(concat!("DocuFind/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| ApiError::Client(e.to_string()))
}

/// Web version: the browser owns connection management and user agent.
#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| ApiError::Client(e.to_string()))
}
