//! Output formatting for command results.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use crate::commands::SearchPage;
use docufind_core::api::{HealthStatus, SearchResult};
use docufind_core::cloud::CloudWordView;
use docufind_core::display::{format_path, format_score};
use docufind_core::viewer::DocumentView;
use serde::Serialize;

/// Maximum characters to show in text snippet
const SNIPPET_MAX_LEN: usize = 200;

/// JSON output structure for a search page
#[derive(Serialize)]
pub struct JsonSearchOutput<'a> {
    pub query: &'a str,
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub results: &'a [SearchResult],
}

#[derive(Serialize)]
struct JsonSuggestOutput<'a> {
    query: &'a str,
    suggestions: &'a [String],
}

#[derive(Serialize)]
struct JsonCloudWord<'a> {
    word: &'a str,
    count: u64,
    font_px: f64,
}

#[derive(Serialize)]
struct JsonCloudOutput<'a> {
    filename: &'a str,
    words: Vec<JsonCloudWord<'a>>,
}

#[derive(Serialize)]
struct JsonDocumentOutput<'a> {
    filename: &'a str,
    raw_url: &'a str,
    inline_pdf: bool,
    document: &'a docufind_core::api::Document,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_search_json(page: &SearchPage) -> String {
    to_json(&JsonSearchOutput {
        query: &page.query,
        page: page.page,
        total_pages: page.total_pages,
        total_results: page.total_results,
        results: &page.results,
    })
}

/// Formats a search page for the terminal.
pub fn format_search_human(page: &SearchPage) -> String {
    if page.results.is_empty() {
        return format!("No documents found for \"{}\"", page.query);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} result{} for \"{}\" (page {} of {}):\n\n",
        page.total_results,
        if page.total_results == 1 { "" } else { "s" },
        page.query,
        page.page,
        page.total_pages
    ));

    for (offset, result) in page.results.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} (score: {})\n",
            page.first_rank + offset,
            result.filename,
            format_score(result.score)
        ));
        output.push_str(&format!("   {}\n", format_path(&result.path)));
        let snippet = truncate_text(&result.snippet, SNIPPET_MAX_LEN);
        if !snippet.is_empty() {
            output.push_str(&format!("   {}\n", indent_text(&snippet, "   ")));
        }
        output.push('\n');
    }

    if page.page < page.total_pages {
        output.push_str(&format!("Next: --page {}", page.page + 1));
    }

    output.trim_end().to_string()
}

/// One suggestion per line; empty when there are none.
pub fn format_suggestions_human(suggestions: &[String]) -> String {
    suggestions.join("\n")
}

pub fn format_suggestions_json(query: &str, suggestions: &[String]) -> String {
    to_json(&JsonSuggestOutput { query, suggestions })
}

pub fn format_cloud_human(filename: &str, words: &[CloudWordView]) -> String {
    if words.is_empty() {
        return format!("No keywords available for {}", filename);
    }

    let width = words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);
    let mut output = format!("Keywords in {}:\n", filename);
    for view in words {
        output.push_str(&format!(
            "  {:<width$}  {:>6}  {:>4.1}px\n",
            view.word,
            view.count,
            view.font_px,
            width = width
        ));
    }
    output.trim_end().to_string()
}

pub fn format_cloud_json(filename: &str, words: &[CloudWordView]) -> String {
    to_json(&JsonCloudOutput {
        filename,
        words: words
            .iter()
            .map(|w| JsonCloudWord {
                word: &w.word,
                count: w.count,
                font_px: w.font_px,
            })
            .collect(),
    })
}

pub fn format_document_human(view: &DocumentView) -> String {
    let mut output = format!("{}\n", view.filename);
    output.push_str(&format!("   Open: {}\n", view.raw_url));
    if view.embed_url.is_some() {
        output.push_str("   (PDF, shown inline in the viewer)\n");
    }
    if let Some(preview) = &view.preview {
        let snippet = truncate_text(preview, SNIPPET_MAX_LEN);
        output.push_str(&format!("\n   {}\n", indent_text(&snippet, "   ")));
    }
    output.trim_end().to_string()
}

pub fn format_document_json(view: &DocumentView) -> String {
    to_json(&JsonDocumentOutput {
        filename: &view.filename,
        raw_url: &view.raw_url,
        inline_pdf: view.embed_url.is_some(),
        document: &view.document,
    })
}

pub fn format_health_human(health: &HealthStatus) -> String {
    let state = if health.is_ok() { "API online" } else { "API degraded" };
    match &health.message {
        Some(message) => format!("{} ({}): {}", state, health.status, message),
        None => format!("{} ({})", state, health.status),
    }
}

pub fn format_health_json(health: &HealthStatus) -> String {
    to_json(health)
}

/// Truncates text to a maximum number of characters, adding ellipsis if needed.
fn truncate_text(text: &str, max_len: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_len).collect();
    // Cut at a word boundary when there is one
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}

/// Indents all lines of text after the first line.
fn indent_text(text: &str, indent: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
