//! Word cloud: sizing, selection and the modal's open/close state machine.
//!
//! ```text
//! Closed ──open(file)──► Open { Loading } ──finish_loading──► Open { Loaded }
//!   ▲                         │                                  │
//!   └──── close() / compose_query() ─────────────────────────────┘
//! ```
//!
//! Opening always starts from an empty selection and an empty word list, so
//! nothing from a previously viewed file can leak into the next one.

use crate::api::{CloudWord, SearchBackend};
use crate::config::{CLOUD_MAX_FONT_PX, CLOUD_MIN_FONT_PX};
use crate::error::ApiError;
use tracing::error;

/// Font size in pixels for a word with `count` occurrences when the most
/// frequent word has `max_count`.
///
/// Linear between 14 px and 74 px. `max_count` is floored at 1 so an empty
/// or all-zero list does not divide by zero.
pub fn font_size(count: u64, max_count: u64) -> f64 {
    let max = max_count.max(1) as f64;
    let ratio = (count as f64 / max).clamp(0.0, 1.0);
    CLOUD_MIN_FONT_PX + ratio * (CLOUD_MAX_FONT_PX - CLOUD_MIN_FONT_PX)
}

/// Fetches the keyword list for `filename`, applying the modal's error policy:
/// failures are logged and yield an empty list. Cancellation is passed through
/// so the caller can drop the outcome silently.
pub async fn load_words<B>(backend: &B, filename: &str) -> Result<Vec<CloudWord>, ApiError>
where
    B: SearchBackend + ?Sized,
{
    match backend.word_cloud(filename).await {
        Ok(words) => Ok(words),
        Err(ApiError::Cancelled) => Err(ApiError::Cancelled),
        Err(e) => {
            error!("Word cloud error for '{}': {}", filename, e);
            Ok(Vec::new())
        }
    }
}

/// A word ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudWordView {
    pub word: String,
    pub count: u64,
    pub font_px: f64,
    pub selected: bool,
}

/// Words picked by the user, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    words: Vec<String>,
}

impl Selection {
    /// Adds `word` if absent, removes it if present.
    pub fn toggle(&mut self, word: &str) {
        if let Some(pos) = self.words.iter().position(|w| w == word) {
            self.words.remove(pos);
        } else {
            self.words.push(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Selected words joined with single spaces, `None` if nothing is selected.
    pub fn to_query(&self) -> Option<String> {
        if self.words.is_empty() {
            None
        } else {
            Some(self.words.join(" "))
        }
    }
}

/// Whether the open modal is still waiting for its words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudStatus {
    Loading,
    Loaded,
}

/// Contents of the open modal.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudPanel {
    pub filename: String,
    pub status: CloudStatus,
    pub words: Vec<CloudWord>,
    pub selection: Selection,
}

impl CloudPanel {
    /// Words with their rendered size and selection state.
    pub fn layout(&self) -> Vec<CloudWordView> {
        let max_count = self.words.iter().map(|w| w.count).max().unwrap_or(0);
        self.words
            .iter()
            .map(|w| CloudWordView {
                word: w.word.clone(),
                count: w.count,
                font_px: font_size(w.count, max_count),
                selected: self.selection.contains(&w.word),
            })
            .collect()
    }
}

/// State of the globally mounted word cloud modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WordCloudState {
    #[default]
    Closed,
    Open(CloudPanel),
}

impl WordCloudState {
    pub fn is_open(&self) -> bool {
        matches!(self, WordCloudState::Open(_))
    }

    pub fn panel(&self) -> Option<&CloudPanel> {
        match self {
            WordCloudState::Open(panel) => Some(panel),
            WordCloudState::Closed => None,
        }
    }

    /// Opens (or re-opens) the modal for `filename` with an empty selection.
    pub fn open(&mut self, filename: impl Into<String>) {
        *self = WordCloudState::Open(CloudPanel {
            filename: filename.into(),
            status: CloudStatus::Loading,
            words: Vec::new(),
            selection: Selection::default(),
        });
    }

    /// Installs fetched words if the modal is still open for `filename`.
    /// Returns `false` when the words arrived for a file no longer shown.
    pub fn finish_loading(&mut self, filename: &str, words: Vec<CloudWord>) -> bool {
        match self {
            WordCloudState::Open(panel) if panel.filename == filename => {
                panel.words = words;
                panel.status = CloudStatus::Loaded;
                true
            }
            _ => false,
        }
    }

    pub fn toggle(&mut self, word: &str) {
        if let WordCloudState::Open(panel) = self {
            panel.selection.toggle(word);
        }
    }

    /// Closes the modal and returns the composed query, if any word is
    /// selected. With an empty selection the modal stays open.
    pub fn compose_query(&mut self) -> Option<String> {
        let query = self.panel()?.selection.to_query()?;
        self.close();
        Some(query)
    }

    pub fn close(&mut self) {
        *self = WordCloudState::Closed;
    }
}
