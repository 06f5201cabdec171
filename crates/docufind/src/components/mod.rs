//! UI components for the DocuFind application.
//!
//! # Context Providers
//!
//! Components share state through Dioxus context:
//!
//! ```ignore
//! // HTTP client for the search backend (provided by App)
//! let api = use_api();
//!
//! // Coordinator state and its message channel (provided by Shell)
//! let coordinator = use_coordinator();
//! let shell = use_shell();
//! shell.send(ShellMessage::OpenWordCloud { filename });
//! ```

pub mod search;
mod shell;
mod word_cloud;

pub use search::{ResultCard, ResultsList, SearchBar};
pub use shell::{Footer, Shell};
pub use word_cloud::WordCloudModal;

use crate::pages::{Home, Viewer};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use docufind_core::coordinator::{Coordinator, ShellMessage};
use docufind_core::ApiClient;

/// Application routes. Every page renders inside the [`Shell`] layout.
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/view/:filename")]
        Viewer { filename: String },
}

/// HTTP client context provider
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Shared coordinator state (word cloud modal, keyword for the search box)
pub fn use_coordinator() -> Signal<Coordinator> {
    use_context::<Signal<Coordinator>>()
}

/// Context provider for sending messages to the shell
pub fn use_shell() -> Coroutine<ShellMessage> {
    use_context::<Coroutine<ShellMessage>>()
}

#[component]
pub fn App() -> Element {
    // The backend URL is fixed for the lifetime of the app
    let api = use_hook(ApiClient::from_env);

    match api {
        Ok(api) => rsx! {
            ApiProvider { api }
        },
        Err(e) => {
            error!("Invalid API configuration: {}", e);
            rsx! {
                div { class: "df-fatal",
                    h1 { "DocuFind cannot start" }
                    p { "{e}" }
                }
            }
        }
    }
}

/// Provides the HTTP client to every page. Mounted only once the client
/// exists, so its hooks always run in the same order.
#[component]
fn ApiProvider(api: ApiClient) -> Element {
    use_context_provider(|| api);

    rsx! {
        Router::<Route> {}
    }
}
