//! Single-document view.

use crate::api::{Document, SearchBackend};
use crate::error::ApiError;
use tracing::warn;

/// True if the document can be embedded inline as a PDF.
pub fn is_pdf(filename: &str) -> bool {
    filename.to_ascii_lowercase().ends_with(".pdf")
}

/// What the viewer page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewerState {
    #[default]
    Loading,
    NotFound,
    Ready(DocumentView),
}

/// A resolved document, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentView {
    pub filename: String,
    /// Link target for "open full document"; never fetched by the viewer.
    pub raw_url: String,
    /// Inline frame source, only for PDFs.
    pub embed_url: Option<String>,
    /// Short text preview when the backend provides one.
    pub preview: Option<String>,
    pub document: Document,
}

impl DocumentView {
    pub fn new(filename: &str, raw_url: String, document: Document) -> Self {
        let embed_url = is_pdf(filename).then(|| raw_url.clone());
        let preview = document
            .snippet
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .cloned();
        Self {
            filename: filename.to_string(),
            raw_url,
            embed_url,
            preview,
            document,
        }
    }
}

/// Fetches `filename` and resolves it to a [`ViewerState`].
///
/// A missing document and a failed fetch both render as not found.
/// Cancellation is passed through so the caller can drop the outcome.
pub async fn load_document<B>(backend: &B, filename: &str) -> Result<ViewerState, ApiError>
where
    B: SearchBackend + ?Sized,
{
    match backend.document(filename).await {
        Ok(Some(document)) => Ok(ViewerState::Ready(DocumentView::new(
            filename,
            backend.raw_file_url(filename),
            document,
        ))),
        Ok(None) => Ok(ViewerState::NotFound),
        Err(ApiError::Cancelled) => Err(ApiError::Cancelled),
        Err(e) => {
            warn!("Failed to load document '{}': {}", filename, e);
            Ok(ViewerState::NotFound)
        }
    }
}
