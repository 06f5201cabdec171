use crate::components::{use_api, use_coordinator, ResultsList, SearchBar};
use dioxus::prelude::*;
use docufind_core::home::HomeState;
use docufind_core::SearchBackend;

/// Landing page: search bar on top, results below.
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let coordinator = use_coordinator();
    let mut home = use_signal(HomeState::new);
    let searching = use_memo(move || home.read().is_loading());

    let handle_search = move |query: String| {
        let Some(query) = home.write().begin(&query) else {
            return;
        };
        let api = api.clone();
        let (token, request) = home
            .write()
            .issue(async move { api.search(&query).await });
        spawn(async move {
            let result = request.await;
            home.write().finish(token, result);
        });
    };

    let keyword = coordinator.read().keyword().clone();

    let state = home.read();
    let show_results = state.shows_results();
    let status = state.status_line();
    let failure = state.error().map(str::to_string);
    let results = state.results().to_vec();
    let generation = state.generation();
    drop(state);

    rsx! {
        div { class: "df-home",
            header { class: "df-hero",
                h1 { class: "df-title", "DocuFind" }
                p { class: "df-subtitle", "Search your document collection" }
            }

            SearchBar { keyword, on_search: handle_search, searching }

            {failure.map(|message| rsx! {
                div { class: "df-notice df-notice--error", "Search failed: {message}" }
            })}
            {status.map(|line| rsx! {
                p { class: "df-results-status", "{line}" }
            })}
            if show_results {
                ResultsList { results, generation }
            }
        }
    }
}
