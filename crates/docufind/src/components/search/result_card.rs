use crate::components::{use_shell, Route};
use docufind_core::display::{format_path, format_score};
use dioxus::prelude::*;
use docufind_core::api::SearchResult;
use docufind_core::coordinator::ShellMessage;

/// One search hit: title linking to the viewer (new tab), location, score,
/// snippet and a button that opens the word cloud for the file.
#[component]
pub fn ResultCard(rank: usize, result: SearchResult) -> Element {
    let shell = use_shell();

    let location = format_path(&result.path);
    let score = format_score(result.score);
    let filename = result.filename.clone();

    rsx! {
        article { class: "df-result-card",
            header { class: "df-result-header",
                div { class: "df-result-rank", "#{rank}" }
                div { class: "df-result-main",
                    Link {
                        class: "df-result-title",
                        to: Route::Viewer { filename: result.filename.clone() },
                        new_tab: true,
                        "{result.filename}"
                    }
                    div { class: "df-result-meta",
                        span { class: "df-result-source", "{location}" }
                    }
                }
                div { class: "df-result-score",
                    span { class: "df-score-label", "Score" }
                    span { class: "df-score-value", "{score}" }
                }
            }

            p { class: "df-result-snippet", "{result.snippet}" }

            footer { class: "df-result-footer",
                button {
                    class: "df-btn df-btn--ghost",
                    onclick: move |_| {
                        shell.send(ShellMessage::OpenWordCloud {
                            filename: filename.clone(),
                        })
                    },
                    "Word cloud"
                }
            }
        }
    }
}
