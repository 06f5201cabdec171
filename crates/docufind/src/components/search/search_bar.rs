use crate::components::use_api;
use dioxus::prelude::*;
use docufind_core::config::SUGGEST_DEBOUNCE_MS;
use docufind_core::search_box::{debounced_suggestions, ExternalKeyword, SearchBox, SuggestTrigger};
use docufind_core::ApiClient;
use std::time::Duration;

/// Starts the debounced suggestion fetch for `trigger`, superseding the
/// previous one. A `Clear` trigger has already emptied the list.
fn schedule_suggestions(mut search_box: Signal<SearchBox>, api: ApiClient, trigger: SuggestTrigger) {
    let SuggestTrigger::Fetch(query) = trigger else {
        return;
    };

    let (token, request) = search_box.write().schedule(async move {
        debounced_suggestions(&api, &query, Duration::from_millis(SUGGEST_DEBOUNCE_MS)).await
    });
    spawn(async move {
        let result = request.await;
        search_box.write().apply_suggestions(token, result);
    });
}

/// Search input with debounced autosuggest.
///
/// `keyword` is a one-way sync from the parent: each new revision overwrites
/// whatever is typed. Submitting (Enter or the button) hands the current text
/// to `on_search`; picking a suggestion only fills the box.
#[component]
pub fn SearchBar(
    keyword: ExternalKeyword,
    on_search: EventHandler<String>,
    searching: ReadSignal<bool>,
) -> Element {
    let api = use_api();
    let mut search_box = use_signal(SearchBox::new);

    let api_for_keyword = api.clone();
    use_effect(use_reactive((&keyword,), move |(keyword,)| {
        let trigger = search_box.write().sync_keyword(&keyword);
        if let Some(trigger) = trigger {
            schedule_suggestions(search_box, api_for_keyword.clone(), trigger);
        }
    }));

    let handle_input = move |evt: FormEvent| {
        let trigger = search_box.write().input(evt.value());
        schedule_suggestions(search_box, api.clone(), trigger);
    };

    let mut submit = move || {
        let query = search_box.write().submit();
        if !query.trim().is_empty() {
            on_search.call(query);
        }
    };

    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            submit();
        }
    };

    let query = search_box.read().query().to_string();
    let suggestions = search_box.read().suggestions().to_vec();

    rsx! {
        section { class: "df-search-bar",
            div { class: "df-search-input-row",
                input {
                    class: "df-search-input",
                    r#type: "text",
                    placeholder: "Search documents…",
                    autocomplete: "off",
                    value: "{query}",
                    oninput: handle_input,
                    onkeypress: handle_keypress,
                }
                button {
                    class: "df-btn df-btn--primary",
                    disabled: searching(),
                    onclick: move |_| submit(),
                    if searching() {
                        "Searching…"
                    } else {
                        "Search"
                    }
                }
            }

            if !suggestions.is_empty() {
                ul { class: "df-suggestions",
                    for suggestion in suggestions {
                        li {
                            key: "{suggestion}",
                            class: "df-suggestion",
                            onclick: {
                                let suggestion = suggestion.clone();
                                move |_| search_box.write().choose_suggestion(suggestion.clone())
                            },
                            "{suggestion}"
                        }
                    }
                }
            }
        }
    }
}
