//! DocuFind search UI.
//!
//! A thin Dioxus front end over [`docufind_core`]: the core crate owns the
//! HTTP client and every piece of UI state logic, this crate only wires that
//! state into signals and renders it.

pub mod components;
pub mod pages;
