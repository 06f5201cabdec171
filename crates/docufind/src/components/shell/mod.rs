//! Application shell: the layout every route renders into.
//!
//! The shell owns the [`Coordinator`] and the coroutine that processes
//! [`ShellMessage`]s, so the results list, the word cloud modal and the
//! search box never reference each other directly.

mod footer;

pub use footer::Footer;

use super::{use_api, Route, WordCloudModal};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use docufind_core::cloud::load_words;
use docufind_core::coordinator::{Coordinator, Effect, ShellMessage};
use docufind_core::request::RequestSlot;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

#[component]
pub fn Shell() -> Element {
    let api = use_api();

    let coordinator = use_signal(Coordinator::new);
    use_context_provider(|| coordinator);

    // At most one word cloud fetch in flight; opening another file aborts it
    let cloud_requests = use_signal(RequestSlot::new);

    let shell = use_coroutine({
        let mut coordinator = coordinator;
        let mut cloud_requests = cloud_requests;

        move |mut rx: UnboundedReceiver<ShellMessage>| {
            let api = api.clone();
            async move {
                while let Some(msg) = rx.next().await {
                    debug!("Shell message: {:?}", msg);
                    let effect = coordinator.write().handle(msg);

                    match effect {
                        Effect::LoadWordCloud { filename } => {
                            let api = api.clone();
                            let name = filename.clone();
                            let (token, request) = cloud_requests
                                .write()
                                .issue(async move { load_words(&api, &name).await });

                            let mut coordinator_for_spawn = coordinator;
                            let mut requests_for_spawn = cloud_requests;
                            spawn(async move {
                                let result = request.await;
                                if !requests_for_spawn.write().settle(token) {
                                    return;
                                }
                                if let Ok(words) = result {
                                    coordinator_for_spawn
                                        .write()
                                        .words_loaded(&filename, words);
                                }
                            });
                        }
                        Effect::CancelWordCloud => cloud_requests.write().cancel(),
                        Effect::None => {}
                    }
                }
            }
        }
    });
    use_context_provider(|| shell);

    rsx! {
        div { class: "df-app",
            main { class: "df-main",
                Outlet::<Route> {}
            }
            Footer {}
            WordCloudModal {}
        }
    }
}
