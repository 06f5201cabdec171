use crate::components::{use_api, Route};
use dioxus::prelude::*;
use docufind_core::request::RequestSlot;
use docufind_core::viewer::{load_document, ViewerState};

/// Document page at `/view/:filename`.
///
/// PDFs are embedded inline from the backend's raw file URL; every file
/// type gets a link that opens the raw file in a new tab.
#[component]
pub fn Viewer(filename: String) -> Element {
    let api = use_api();
    let mut state = use_signal(ViewerState::default);
    let mut requests = use_signal(RequestSlot::new);

    // Refetch whenever the route parameter changes; the spawned task is
    // dropped with the page
    use_effect(use_reactive((&filename,), move |(filename,)| {
        state.set(ViewerState::Loading);
        let api = api.clone();
        let (token, request) = requests
            .write()
            .issue(async move { load_document(&api, &filename).await });
        spawn(async move {
            let result = request.await;
            if !requests.write().settle(token) {
                return;
            }
            if let Ok(resolved) = result {
                state.set(resolved);
            }
        });
    }));

    let body = match &*state.read() {
        ViewerState::Loading => rsx! {
            p { class: "df-viewer-status", "Loading document…" }
        },
        ViewerState::NotFound => rsx! {
            div { class: "df-notice df-notice--error", "Document not found." }
        },
        ViewerState::Ready(view) => rsx! {
            header { class: "df-viewer-header",
                h1 { class: "df-viewer-title", "{view.filename}" }
                a {
                    class: "df-btn df-btn--primary",
                    href: "{view.raw_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Open full document"
                }
            }
            {view.preview.clone().map(|preview| rsx! {
                pre { class: "df-viewer-preview", "{preview}" }
            })}
            {view.embed_url.clone().map(|src| rsx! {
                iframe {
                    class: "df-viewer-frame",
                    src: "{src}",
                    title: "{view.filename}",
                }
            })}
        },
    };

    rsx! {
        div { class: "df-viewer",
            nav { class: "df-viewer-nav",
                Link { class: "df-back-link", to: Route::Home {}, "← Back to search" }
            }
            {body}
        }
    }
}
