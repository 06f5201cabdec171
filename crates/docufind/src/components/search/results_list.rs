use super::ResultCard;
use dioxus::prelude::*;
use docufind_core::api::SearchResult;
use docufind_core::pagination::Paginator;

/// Paginated list of search results, five per page.
///
/// `generation` identifies the result set; a new one sends the list back to
/// page 1.
#[component]
pub fn ResultsList(results: Vec<SearchResult>, generation: u64) -> Element {
    let mut pager = use_signal(Paginator::default);

    use_effect(use_reactive((&generation,), move |(generation,)| {
        pager.write().sync(generation);
    }));

    if results.is_empty() {
        return rsx! {
            section { class: "df-empty-state",
                p { class: "df-empty-text", "No documents found." }
            }
        };
    }

    // Render against the incoming result set even before the effect has run
    let view = pager.read().synced(generation);
    let len = results.len();
    let controls = view.controls(len);
    let range = view.item_range(len);
    let first_rank = range.start + 1;
    let shown = results[range].to_vec();

    rsx! {
        section { class: "df-results",
            div { class: "df-results-list",
                for (offset, result) in shown.into_iter().enumerate() {
                    ResultCard {
                        key: "{generation}-{result.filename}-{offset}",
                        rank: first_rank + offset,
                        result,
                    }
                }
            }

            nav { class: "df-pagination",
                button {
                    class: "df-btn df-btn--ghost",
                    disabled: controls.previous_disabled,
                    onclick: move |_| pager.write().previous(),
                    "Previous"
                }
                for page in controls.pages() {
                    button {
                        key: "{page}",
                        class: if controls.is_current(page) { "df-page df-page--current" } else { "df-page" },
                        onclick: move |_| pager.write().go_to(page, len),
                        "{page}"
                    }
                }
                button {
                    class: "df-btn df-btn--ghost",
                    disabled: controls.next_disabled,
                    onclick: move |_| pager.write().next(len),
                    "Next"
                }
            }
        }
    }
}
