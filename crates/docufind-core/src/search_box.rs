//! Search box state: query text, debounced suggestions and keyword sync.
//!
//! # Suggestion lifecycle
//!
//! ```text
//! keystroke ──► input() ──► Clear            (trimmed query < 3 chars)
//!                      └──► Fetch(query) ──► schedule(debounced fetch)
//!                                               │ sleeps 300 ms, then fetches
//! next keystroke ──► input() aborts it ─────────┘
//! ```
//!
//! The debounce timer and the fetch are one future owned by the box's
//! [`RequestSlot`], so a keystroke cancels both and a response arriving after
//! a newer keystroke is dropped by [`SearchBox::apply_suggestions`].

use crate::api::SearchBackend;
use crate::config::SUGGEST_MIN_CHARS;
use crate::error::ApiError;
use crate::platform;
use crate::request::{RequestSlot, RequestToken};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// True if `query` is long enough to ask for suggestions.
pub fn wants_suggestions(query: &str) -> bool {
    query.trim().chars().count() >= SUGGEST_MIN_CHARS
}

/// Waits out the debounce window, then fetches suggestions for `query`.
pub async fn debounced_suggestions<B>(
    backend: &B,
    query: &str,
    delay: Duration,
) -> Result<Vec<String>, ApiError>
where
    B: SearchBackend + ?Sized,
{
    platform::sleep(delay).await;
    backend.suggest(query).await
}

/// A keyword pushed into the search box from outside (the word cloud).
///
/// The revision increases with every push, so the same text applied twice
/// still overwrites whatever the user typed in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalKeyword {
    pub text: String,
    pub revision: u64,
}

/// What the caller should do after the query text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestTrigger {
    /// Query too short: suggestions were cleared, nothing to fetch.
    Clear,
    /// Schedule a debounced fetch for this (trimmed) query.
    Fetch(String),
}

#[derive(Debug, Default)]
pub struct SearchBox {
    query: String,
    suggestions: Vec<String>,
    keyword_revision: u64,
    slot: RequestSlot,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// True while a debounced fetch is waiting or in flight.
    pub fn is_fetching(&self) -> bool {
        self.slot.is_pending()
    }

    /// Replaces the query text, as on every keystroke.
    pub fn input(&mut self, text: impl Into<String>) -> SuggestTrigger {
        self.query = text.into();
        if wants_suggestions(&self.query) {
            SuggestTrigger::Fetch(self.query.trim().to_string())
        } else {
            self.slot.cancel();
            self.suggestions.clear();
            SuggestTrigger::Clear
        }
    }

    /// Registers `fetch` as the pending suggestion request, aborting the
    /// previous one (and its debounce timer).
    pub fn schedule<F>(
        &mut self,
        fetch: F,
    ) -> (RequestToken, impl Future<Output = Result<Vec<String>, ApiError>>)
    where
        F: Future<Output = Result<Vec<String>, ApiError>>,
    {
        self.slot.issue(fetch)
    }

    /// Applies the outcome of a scheduled fetch.
    ///
    /// Stale or cancelled responses are ignored. Failures are swallowed and
    /// leave the suggestion list empty. Returns `true` if the list changed.
    pub fn apply_suggestions(
        &mut self,
        token: RequestToken,
        result: Result<Vec<String>, ApiError>,
    ) -> bool {
        if !self.slot.settle(token) {
            return false;
        }
        match result {
            Ok(suggestions) => self.suggestions = suggestions,
            Err(e) => {
                debug!("Suggestion fetch failed: {}", e);
                self.suggestions.clear();
            }
        }
        true
    }

    /// Explicit submit: hides suggestions and returns the query for the parent.
    pub fn submit(&mut self) -> String {
        self.slot.cancel();
        self.suggestions.clear();
        self.query.clone()
    }

    /// Puts a clicked suggestion into the box without submitting.
    pub fn choose_suggestion(&mut self, suggestion: impl Into<String>) {
        self.slot.cancel();
        self.query = suggestion.into();
        self.suggestions.clear();
    }

    /// One-way sync from the parent: a new keyword revision overwrites the text.
    pub fn sync_keyword(&mut self, keyword: &ExternalKeyword) -> Option<SuggestTrigger> {
        if keyword.revision <= self.keyword_revision {
            return None;
        }
        self.keyword_revision = keyword.revision;
        Some(self.input(keyword.text.clone()))
    }
}
