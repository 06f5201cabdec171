//! DocuFind CLI - terminal client for the DocuFind search API.
//!
//! # Usage
//!
//! ```bash
//! # Search (5 results per page, like the web UI)
//! dfind search "annual report"
//! dfind search "annual report" --page 2
//!
//! # Autosuggest, keywords and document metadata
//! dfind suggest repo
//! dfind cloud report.pdf -n 20
//! dfind doc report.pdf
//!
//! # Point at another backend, machine-readable output
//! dfind --api-url http://search.internal:8000 --json ping
//! ```

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docufind_core::config::{DEFAULT_API_URL, REQUEST_TIMEOUT_SECS};
use tracing_subscriber::EnvFilter;

/// DocuFind document search CLI.
///
/// Talks to the same HTTP API as the DocuFind web app.
#[derive(Parser)]
#[command(name = "dfind", version, about)]
struct Cli {
    /// Base URL of the DocuFind API
    #[arg(long, global = true, env = "DOCUFIND_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = REQUEST_TIMEOUT_SECS)]
    timeout: u64,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search documents and show one page of results
    Search {
        /// Search query
        query: String,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Autocomplete suggestions for a partial query
    Suggest {
        /// Partial query (at least 3 characters)
        query: String,
    },
    /// Most frequent words of a document
    Cloud {
        /// Document file name
        filename: String,

        /// Maximum number of words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Document metadata and raw file link
    Doc {
        /// Document file name
        filename: String,
    },
    /// Check that the backend is reachable
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cloud_limit = match &cli.command {
        Command::Cloud { limit, .. } => *limit,
        _ => None,
    };
    let api = config::build_client(&cli.api_url, cli.timeout, cloud_limit)?;

    let text = match &cli.command {
        Command::Search { query, page } => {
            let page = commands::search(&api, query, *page).await?;
            if cli.json {
                output::format_search_json(&page)
            } else {
                output::format_search_human(&page)
            }
        }
        Command::Suggest { query } => {
            let suggestions = commands::suggest(&api, query).await?;
            if cli.json {
                output::format_suggestions_json(query, &suggestions)
            } else {
                output::format_suggestions_human(&suggestions)
            }
        }
        Command::Cloud { filename, .. } => {
            let words = commands::cloud(&api, filename).await?;
            if cli.json {
                output::format_cloud_json(filename, &words)
            } else {
                output::format_cloud_human(filename, &words)
            }
        }
        Command::Doc { filename } => match commands::document(&api, filename).await? {
            Some(view) => {
                if cli.json {
                    output::format_document_json(&view)
                } else {
                    output::format_document_human(&view)
                }
            }
            None => {
                eprintln!("Document not found.");
                std::process::exit(1);
            }
        },
        Command::Ping => {
            let health = commands::ping(&api).await?;
            if cli.json {
                output::format_health_json(&health)
            } else {
                output::format_health_human(&health)
            }
        }
    };

    if !text.is_empty() {
        println!("{}", text);
    }

    Ok(())
}
