//! Command execution against the search backend.
//!
//! Each command applies the same rules as the web UI (page size, minimum
//! suggestion length, font scaling) by going through `docufind-core`.

use anyhow::{bail, Result};
use docufind_core::api::{HealthStatus, SearchResult};
use docufind_core::cloud::{CloudPanel, CloudStatus, CloudWordView, Selection};
use docufind_core::pagination::{total_pages, Paginator};
use docufind_core::search_box::wants_suggestions;
use docufind_core::viewer::DocumentView;
use docufind_core::SearchBackend;
use tracing::info;

/// One page of a search, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub query: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    /// 1-based rank of the first result on this page.
    pub first_rank: usize,
    pub results: Vec<SearchResult>,
}

/// Runs `query` and cuts out `page` (5 results per page).
pub async fn search<B>(backend: &B, query: &str, page: usize) -> Result<SearchPage>
where
    B: SearchBackend + ?Sized,
{
    if query.trim().is_empty() {
        bail!("Search query is empty");
    }

    let response = backend.search(query).await?;
    let results = response.results;
    info!("Search returned {} results", results.len());

    let mut pager = Paginator::default();
    let pages = total_pages(results.len(), pager.per_page());
    if pages > 0 && !(1..=pages).contains(&page) {
        bail!("Page {} is out of range (1-{})", page, pages);
    }
    pager.go_to(page, results.len());

    let range = pager.item_range(results.len());
    Ok(SearchPage {
        query: query.to_string(),
        page: pager.page(),
        total_pages: pages,
        total_results: results.len(),
        first_rank: range.start + 1,
        results: results[range].to_vec(),
    })
}

/// Suggestions for `query`, or nothing when the query is too short.
pub async fn suggest<B>(backend: &B, query: &str) -> Result<Vec<String>>
where
    B: SearchBackend + ?Sized,
{
    if !wants_suggestions(query) {
        return Ok(Vec::new());
    }
    Ok(backend.suggest(query.trim()).await?)
}

/// Keyword list for `filename` with the same font sizes the word cloud uses.
pub async fn cloud<B>(backend: &B, filename: &str) -> Result<Vec<CloudWordView>>
where
    B: SearchBackend + ?Sized,
{
    let words = backend.word_cloud(filename).await?;
    let panel = CloudPanel {
        filename: filename.to_string(),
        status: CloudStatus::Loaded,
        words,
        selection: Selection::default(),
    };
    Ok(panel.layout())
}

/// Document metadata, `None` if the backend does not know the file.
pub async fn document<B>(backend: &B, filename: &str) -> Result<Option<DocumentView>>
where
    B: SearchBackend + ?Sized,
{
    let found = backend.document(filename).await?;
    Ok(found.map(|document| DocumentView::new(filename, backend.raw_file_url(filename), document)))
}

pub async fn ping<B>(backend: &B) -> Result<HealthStatus>
where
    B: SearchBackend + ?Sized,
{
    Ok(backend.ping().await?)
}
