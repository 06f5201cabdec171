//! Test utilities for docufind-core.
//!
//! Provides an in-memory [`SearchBackend`] that records every call, so tests
//! can assert on what was requested as well as on what was rendered.
//! Only compiled when running tests.

use crate::api::{CloudWord, Document, HealthStatus, SearchBackend, SearchResponse, SearchResult};
use crate::error::ApiError;
use std::cell::RefCell;
use std::collections::HashMap;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(String),
    Suggest(String),
    Document(String),
    WordCloud(String),
    Ping,
}

/// In-memory backend with canned answers.
#[derive(Default)]
pub struct StubBackend {
    pub results: Vec<SearchResult>,
    pub suggestions: Vec<String>,
    pub documents: HashMap<String, Document>,
    pub clouds: HashMap<String, Vec<CloudWord>>,
    /// When set, every network operation fails with this error.
    pub failure: Option<ApiError>,
    calls: RefCell<Vec<Call>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, results: Vec<SearchResult>) -> Self {
        self.results = results;
        self
    }

    pub fn with_suggestions(mut self, suggestions: &[&str]) -> Self {
        self.suggestions = suggestions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_document(mut self, filename: &str) -> Self {
        self.documents.insert(
            filename.to_string(),
            Document {
                filename: Some(filename.to_string()),
                snippet: Some(format!("Preview of {}", filename)),
                ..Document::default()
            },
        );
        self
    }

    pub fn with_cloud(mut self, filename: &str, words: &[(&str, u64)]) -> Self {
        self.clouds.insert(
            filename.to_string(),
            words.iter().map(|(w, c)| CloudWord::new(*w, *c)).collect(),
        );
        self
    }

    pub fn failing(mut self, error: ApiError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl SearchBackend for StubBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        self.record(Call::Search(query.to_string()))?;
        Ok(SearchResponse {
            query: Some(query.to_string()),
            count: Some(self.results.len()),
            results: self.results.clone(),
        })
    }

    async fn suggest(&self, query: &str) -> Result<Vec<String>, ApiError> {
        self.record(Call::Suggest(query.to_string()))?;
        Ok(self.suggestions.clone())
    }

    async fn document(&self, filename: &str) -> Result<Option<Document>, ApiError> {
        self.record(Call::Document(filename.to_string()))?;
        Ok(self.documents.get(filename).cloned())
    }

    async fn word_cloud(&self, filename: &str) -> Result<Vec<CloudWord>, ApiError> {
        self.record(Call::WordCloud(filename.to_string()))?;
        Ok(self.clouds.get(filename).cloned().unwrap_or_default())
    }

    async fn ping(&self) -> Result<HealthStatus, ApiError> {
        self.record(Call::Ping)?;
        Ok(HealthStatus {
            status: "ok".to_string(),
            message: None,
        })
    }

    fn raw_file_url(&self, filename: &str) -> String {
        format!("http://stub/raw/{}", filename)
    }
}

/// Creates `count` results named `doc-1.txt`, `doc-2.txt`, ...
pub fn sample_results(count: usize) -> Vec<SearchResult> {
    (1..=count)
        .map(|i| SearchResult {
            filename: format!("doc-{}.txt", i),
            path: format!("/raw/doc-{}.txt", i),
            snippet: format!("Snippet {}", i),
            score: (count - i) as f64,
        })
        .collect()
}
