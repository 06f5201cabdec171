//! # DocuFind Core
//!
//! Platform-independent library behind the DocuFind search UI.
//!
//! The search engine itself is a remote service; this crate holds everything
//! the frontends (Dioxus app, CLI) share on top of it, designed to be testable
//! without a UI runtime.
//!
//! ## Modules
//!
//! - [`api`] - Wire types, the [`api::SearchBackend`] trait and the HTTP [`api::ApiClient`]
//! - [`request`] - Request slots: cancellation, timeouts and stale-response sequencing
//! - [`search_box`] - Query text, debounced suggestions and external keyword sync
//! - [`pagination`] - Client-side paging over an already-fetched result set
//! - [`cloud`] - Word cloud sizing, selection and open/close state machine
//! - [`home`] - Result set, loading flag and search outcome handling
//! - [`viewer`] - Single-document view state
//! - [`display`] - Score and path formatting for results
//! - [`coordinator`] - Typed shell messages replacing global browser events
//! - [`config`] - Production constants and API configuration
//! - [`error`] - Error types

pub mod api;
pub mod cloud;
pub mod config;
pub mod coordinator;
pub mod display;
pub mod error;
pub mod home;
pub mod pagination;
pub mod platform;
pub mod request;
pub mod search_box;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::{ApiClient, SearchBackend};
pub use error::ApiError;
