use crate::components::use_api;
use dioxus::prelude::*;
use docufind_core::SearchBackend;

/// Footer showing which backend the UI talks to and whether it answers.
#[component]
pub fn Footer() -> Element {
    let api = use_api();
    let base_url = api.base_url().to_string();

    let health = use_resource(move || {
        let api = api.clone();
        async move { api.ping().await }
    });

    let (status_class, status_text) = match &*health.read() {
        None => ("df-status df-status--pending", "Checking API…"),
        Some(Ok(status)) if status.is_ok() => ("df-status df-status--ok", "API online"),
        Some(_) => ("df-status df-status--down", "API unreachable"),
    };

    rsx! {
        footer { class: "df-footer",
            span { class: status_class, "{status_text}" }
            span { class: "df-footer-text", "{base_url}" }
        }
    }
}
