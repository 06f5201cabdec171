//! Home page state: the current result set and the loading flag.
//!
//! Each applied result set gets a new generation number; the results list
//! uses it to return to page 1. Searches go through a [`RequestSlot`], so
//! starting a new search aborts the previous one and a slow response can
//! never replace newer results.

use crate::api::{SearchResponse, SearchResult};
use crate::error::ApiError;
use crate::request::{RequestSlot, RequestToken};
use std::future::Future;
use tracing::{error, info};

#[derive(Debug, Default)]
pub struct HomeState {
    results: Vec<SearchResult>,
    generation: u64,
    loading: bool,
    pending_query: Option<String>,
    shown_query: Option<String>,
    error: Option<String>,
    slot: RequestSlot,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Identity of the current result set.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Query of the most recently started search.
    pub fn last_query(&self) -> Option<&str> {
        self.pending_query.as_deref()
    }

    /// Failure message of the last search, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a search for `query`. Blank queries are ignored (`None`).
    pub fn begin(&mut self, query: &str) -> Option<String> {
        if query.trim().is_empty() {
            return None;
        }
        info!("Searching for: '{}'", query);
        self.loading = true;
        self.error = None;
        self.pending_query = Some(query.to_string());
        Some(query.to_string())
    }

    /// Registers the search request, aborting any search still in flight.
    pub fn issue<F>(
        &mut self,
        request: F,
    ) -> (RequestToken, impl Future<Output = Result<SearchResponse, ApiError>>)
    where
        F: Future<Output = Result<SearchResponse, ApiError>>,
    {
        self.slot.issue(request)
    }

    /// Applies a finished search. Returns `false` for superseded requests.
    pub fn finish(&mut self, token: RequestToken, result: Result<SearchResponse, ApiError>) -> bool {
        if !self.slot.settle(token) {
            return false;
        }
        self.loading = false;
        self.generation += 1;
        self.shown_query = self.pending_query.clone();

        match result {
            Ok(response) => {
                info!("Search returned {} results", response.results.len());
                self.results = response.results;
            }
            Err(e) => {
                error!("Search failed: {}", e);
                self.results.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Whether the results list is rendered. It is hidden only while a
    /// search runs, so the empty state shows before the first search too.
    pub fn shows_results(&self) -> bool {
        !self.loading
    }

    /// Line above the results: progress while loading, then the summary.
    pub fn status_line(&self) -> Option<String> {
        if self.loading {
            return Some("Searching…".to_string());
        }
        self.summary()
    }

    /// Header line such as `12 results for "report"`, once a search finished.
    pub fn summary(&self) -> Option<String> {
        let query = self.shown_query.as_ref()?;
        let count = self.results.len();
        let noun = if count == 1 { "result" } else { "results" };
        Some(format!("{} {} for \"{}\"", count, noun, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SearchBackend;
    use crate::test_utils::{sample_results, Call, StubBackend};
    use std::rc::Rc;

    async fn search(home: &mut HomeState, backend: &Rc<StubBackend>, query: &str) -> bool {
        let Some(query) = home.begin(query) else {
            return false;
        };
        let backend = Rc::clone(backend);
        let (token, request) = home.issue(async move { backend.search(&query).await });
        let result = request.await;
        home.finish(token, result)
    }

    #[tokio::test]
    async fn test_search_replaces_results() {
        let backend = Rc::new(StubBackend::new().with_results(sample_results(12)));
        let mut home = HomeState::new();

        assert!(search(&mut home, &backend, "report").await);
        assert_eq!(home.results().len(), 12);
        assert!(!home.is_loading());
        assert_eq!(home.generation(), 1);
        assert_eq!(home.summary().as_deref(), Some("12 results for \"report\""));
        assert_eq!(backend.calls(), vec![Call::Search("report".to_string())]);
    }

    #[tokio::test]
    async fn test_blank_query_ignored() {
        let backend = Rc::new(StubBackend::new());
        let mut home = HomeState::new();

        assert!(!search(&mut home, &backend, "   ").await);
        assert!(backend.calls().is_empty());
        assert!(!home.is_loading());
        assert_eq!(home.summary(), None);
    }

    #[tokio::test]
    async fn test_missing_results_field_means_empty() {
        let mut home = HomeState::new();
        home.begin("nothing");
        let (token, request) = home.issue(async { Ok(SearchResponse::default()) });
        home.finish(token, request.await);

        assert!(home.results().is_empty());
        assert_eq!(home.summary().as_deref(), Some("0 results for \"nothing\""));
    }

    #[tokio::test]
    async fn test_failure_clears_loading_and_reports() {
        let backend = Rc::new(
            StubBackend::new().failing(ApiError::Transport("connection refused".into())),
        );
        let mut home = HomeState::new();

        assert!(search(&mut home, &backend, "report").await);
        assert!(!home.is_loading());
        assert!(home.results().is_empty());
        assert_eq!(home.error(), Some("Request failed: connection refused"));
    }

    #[test]
    fn test_loading_while_in_flight() {
        let mut home = HomeState::new();
        home.begin("report");
        let (_token, _request) = home.issue(async { Ok(SearchResponse::default()) });
        assert!(home.is_loading());
        assert_eq!(home.last_query(), Some("report"));
    }

    #[tokio::test]
    async fn test_slow_old_search_cannot_overwrite_newer() {
        let mut home = HomeState::new();

        home.begin("old");
        let (old_token, _old_request) = home.issue(async {
            Ok(SearchResponse {
                results: sample_results(9),
                ..SearchResponse::default()
            })
        });

        home.begin("new");
        let (new_token, new_request) = home.issue(async {
            Ok(SearchResponse {
                results: sample_results(2),
                ..SearchResponse::default()
            })
        });
        assert!(home.finish(new_token, new_request.await));

        // The old response "arrives" late
        let late = Ok(SearchResponse {
            results: sample_results(9),
            ..SearchResponse::default()
        });
        assert!(!home.finish(old_token, late));
        assert_eq!(home.results().len(), 2);
        assert_eq!(home.summary().as_deref(), Some("2 results for \"new\""));
    }

    #[tokio::test]
    async fn test_each_search_bumps_generation() {
        let backend = Rc::new(StubBackend::new().with_results(sample_results(3)));
        let mut home = HomeState::new();
        search(&mut home, &backend, "a").await;
        search(&mut home, &backend, "a").await;
        assert_eq!(home.generation(), 2);
    }

    #[test]
    fn test_initial_state_shows_empty_list() {
        let home = HomeState::new();
        assert!(home.shows_results());
        assert!(home.results().is_empty());
        assert_eq!(home.status_line(), None);
    }

    #[test]
    fn test_loading_hides_list() {
        let mut home = HomeState::new();
        home.begin("report");
        assert!(!home.shows_results());
        assert_eq!(home.status_line().as_deref(), Some("Searching…"));

        let (token, _request) = home.issue(async { Ok(SearchResponse::default()) });
        home.finish(token, Ok(SearchResponse::default()));
        assert!(home.shows_results());
        assert_eq!(home.status_line().as_deref(), Some("0 results for \"report\""));
    }

    #[test]
    fn test_summary_singular() {
        let mut home = HomeState::new();
        home.begin("budget");
        let (token, _request) = home.issue(async { Ok(SearchResponse::default()) });
        home.finish(
            token,
            Ok(SearchResponse {
                results: sample_results(1),
                ..SearchResponse::default()
            }),
        );
        assert_eq!(home.summary().as_deref(), Some("1 result for \"budget\""));
    }
}
