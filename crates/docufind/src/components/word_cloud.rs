//! Word cloud modal, mounted once by the shell.

use super::{use_coordinator, use_shell};
use dioxus::prelude::*;
use docufind_core::cloud::CloudStatus;
use docufind_core::coordinator::ShellMessage;

/// Overlay listing a document's most frequent words, sized by frequency.
///
/// Clicking words toggles them into a selection; "Search these words" pushes
/// the joined selection into the search box and closes the modal. The search
/// itself is left to the user.
#[component]
pub fn WordCloudModal() -> Element {
    let mut coordinator = use_coordinator();
    let shell = use_shell();

    let Some(panel) = coordinator.read().cloud().panel().cloned() else {
        return rsx! {};
    };

    let words = panel.layout();
    let selected = panel.selection.len();
    let loading = panel.status == CloudStatus::Loading;

    let handle_apply = move |_| {
        let query = coordinator.write().cloud_mut().compose_query();
        if let Some(query) = query {
            shell.send(ShellMessage::ApplyCloudQuery { query });
        }
    };

    rsx! {
        div {
            class: "df-overlay",
            onclick: move |_| shell.send(ShellMessage::CloseWordCloud),

            div {
                class: "df-word-cloud",
                onclick: move |e| e.stop_propagation(), // Prevent closing when clicking inside

                header { class: "df-word-cloud-header",
                    h2 { "Keywords in {panel.filename}" }
                    button {
                        class: "df-icon-button",
                        "aria-label": "Close word cloud",
                        onclick: move |_| shell.send(ShellMessage::CloseWordCloud),
                        "✕"
                    }
                }

                div { class: "df-word-cloud-body",
                    if loading {
                        p { class: "df-word-cloud-status", "Loading keywords…" }
                    } else if words.is_empty() {
                        p { class: "df-word-cloud-status", "No keywords available." }
                    } else {
                        for view in words {
                            span {
                                key: "{view.word}",
                                class: if view.selected { "df-cloud-word df-cloud-word--selected" } else { "df-cloud-word" },
                                style: "font-size: {view.font_px}px;",
                                title: "{view.count} occurrences",
                                onclick: {
                                    let word = view.word.clone();
                                    move |_| coordinator.write().cloud_mut().toggle(&word)
                                },
                                "{view.word}"
                            }
                        }
                    }
                }

                footer { class: "df-word-cloud-footer",
                    button {
                        class: "df-btn df-btn--primary",
                        disabled: selected == 0,
                        onclick: handle_apply,
                        if selected == 1 {
                            "Search this word"
                        } else {
                            "Search these {selected} words"
                        }
                    }
                }
            }
        }
    }
}
