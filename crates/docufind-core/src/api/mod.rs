//! Access to the remote search backend.
//!
//! # Architecture
//!
//! - [`SearchBackend`]: the operations the UI needs, independent of transport
//! - [`ApiClient`]: HTTP implementation over `reqwest` (native and WASM)
//! - [`types`]: JSON wire types
//!
//! The state machines in this crate take `&dyn SearchBackend`-compatible
//! generics, so they run against an in-memory backend in tests and against
//! [`ApiClient`] in the app and CLI.

mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    CloudWord, Document, HealthStatus, SearchResponse, SearchResult, SuggestResponse,
    WordCloudResponse,
};

use crate::error::ApiError;

/// Read-only operations offered by the search backend.
///
/// `?Send` because the web build runs on a single-threaded executor where
/// browser fetch futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait SearchBackend {
    /// Ranked results for `query`.
    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError>;

    /// Spelling/completion suggestions for a partial query.
    async fn suggest(&self, query: &str) -> Result<Vec<String>, ApiError>;

    /// Metadata for one document, `None` if the backend does not know it.
    async fn document(&self, filename: &str) -> Result<Option<Document>, ApiError>;

    /// Most frequent keywords of one document.
    async fn word_cloud(&self, filename: &str) -> Result<Vec<CloudWord>, ApiError>;

    /// Health check.
    async fn ping(&self) -> Result<HealthStatus, ApiError>;

    /// Address of the document's original bytes. Pure string construction.
    fn raw_file_url(&self, filename: &str) -> String;
}
