//! Wire types returned by the search backend.
//!
//! Every collection field defaults to empty so a response missing a field
//! behaves like an empty answer rather than a decode failure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One ranked document in a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub filename: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub score: f64,
}

/// Response of `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// Response of `GET /suggest/<query>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// A keyword and its frequency inside one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudWord {
    pub word: String,
    #[serde(default)]
    pub count: u64,
}

impl CloudWord {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Response of `GET /cloud/<filename>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordCloudResponse {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub word_count: Option<usize>,
    #[serde(default)]
    pub top_words: Vec<CloudWord>,
}

/// Document metadata from `GET /document/<filename>`.
///
/// Only `filename` is used for addressing. The other known fields feed the
/// viewer's preview; anything else the backend sends is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub full_content: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /ping`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_full() {
        let json = r#"{
            "query": "report",
            "count": 1,
            "results": [
                {"filename": "q3.pdf", "path": "/raw/q3.pdf", "snippet": "Quarterly", "score": 12}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.query.as_deref(), Some("report"));
        assert_eq!(response.count, Some(1));
        assert_eq!(response.results[0].filename, "q3.pdf");
        assert_eq!(response.results[0].score, 12.0);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let search: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(search.results.is_empty());

        let suggest: SuggestResponse = serde_json::from_str("{}").unwrap();
        assert!(suggest.suggestions.is_empty());

        let cloud: WordCloudResponse = serde_json::from_str(r#"{"filename": "a.txt"}"#).unwrap();
        assert!(cloud.top_words.is_empty());
    }

    #[test]
    fn test_document_keeps_unknown_fields() {
        let json = r#"{
            "filename": "notes.txt",
            "snippet": "hello",
            "full_content": null,
            "pages": 3
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.filename.as_deref(), Some("notes.txt"));
        assert_eq!(doc.full_content, None);
        assert_eq!(doc.extra.get("pages"), Some(&Value::from(3)));
    }

    #[test]
    fn test_null_document_is_none() {
        let doc: Option<Document> = serde_json::from_str("null").unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn test_health_status() {
        let ok: HealthStatus =
            serde_json::from_str(r#"{"status": "ok", "message": "running"}"#).unwrap();
        assert!(ok.is_ok());

        let degraded: HealthStatus = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!degraded.is_ok());
    }
}
