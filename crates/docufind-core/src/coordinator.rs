//! Typed messages between decoupled parts of the UI.
//!
//! The results list, the globally mounted word cloud modal and the home
//! page's search box do not know about each other. They talk through
//! [`ShellMessage`]s delivered to one [`Coordinator`], which owns the modal
//! state and the keyword pushed back into the search box, and tells the
//! caller which side effects to run.

use crate::api::CloudWord;
use crate::cloud::WordCloudState;
use crate::search_box::ExternalKeyword;

/// Requests routed through the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMessage {
    /// Show the word cloud for one document.
    OpenWordCloud { filename: String },
    /// Put a composed query into the search box (never runs the search).
    ApplyCloudQuery { query: String },
    /// Dismiss the word cloud without a query.
    CloseWordCloud,
}

/// Side effects the caller must perform after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch the keyword list for `filename` (superseding any earlier fetch)
    /// and pass the outcome to [`Coordinator::words_loaded`].
    LoadWordCloud { filename: String },
    /// Abort any in-flight keyword fetch.
    CancelWordCloud,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinator {
    cloud: WordCloudState,
    keyword: ExternalKeyword,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cloud(&self) -> &WordCloudState {
        &self.cloud
    }

    pub fn cloud_mut(&mut self) -> &mut WordCloudState {
        &mut self.cloud
    }

    /// Latest keyword destined for the search box.
    pub fn keyword(&self) -> &ExternalKeyword {
        &self.keyword
    }

    pub fn handle(&mut self, message: ShellMessage) -> Effect {
        match message {
            ShellMessage::OpenWordCloud { filename } => {
                if filename.is_empty() {
                    return Effect::None;
                }
                self.cloud.open(filename.clone());
                Effect::LoadWordCloud { filename }
            }
            ShellMessage::ApplyCloudQuery { query } => {
                if query.trim().is_empty() {
                    return Effect::None;
                }
                self.keyword = ExternalKeyword {
                    text: query,
                    revision: self.keyword.revision + 1,
                };
                self.cloud.close();
                Effect::CancelWordCloud
            }
            ShellMessage::CloseWordCloud => {
                self.cloud.close();
                Effect::CancelWordCloud
            }
        }
    }

    /// Delivers fetched words for `filename`. Dropped if the modal moved on.
    pub fn words_loaded(&mut self, filename: &str, words: Vec<CloudWord>) -> bool {
        self.cloud.finish_loading(filename, words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::HomeState;
    use crate::search_box::{SearchBox, SuggestTrigger};

    fn open(coordinator: &mut Coordinator, filename: &str) -> Effect {
        coordinator.handle(ShellMessage::OpenWordCloud {
            filename: filename.to_string(),
        })
    }

    #[test]
    fn test_open_requests_load() {
        let mut coordinator = Coordinator::new();
        assert_eq!(
            open(&mut coordinator, "a.txt"),
            Effect::LoadWordCloud {
                filename: "a.txt".to_string()
            }
        );
        assert!(coordinator.cloud().is_open());
    }

    #[test]
    fn test_open_without_filename_ignored() {
        let mut coordinator = Coordinator::new();
        assert_eq!(open(&mut coordinator, ""), Effect::None);
        assert!(!coordinator.cloud().is_open());
    }

    #[test]
    fn test_open_a_then_b_resets_selection_before_b_words() {
        let mut coordinator = Coordinator::new();
        open(&mut coordinator, "a.txt");
        coordinator.words_loaded("a.txt", vec![CloudWord::new("alpha", 2)]);
        coordinator.cloud_mut().toggle("alpha");

        open(&mut coordinator, "b.txt");
        let panel = coordinator.cloud().panel().unwrap();
        assert!(panel.selection.is_empty());
        assert!(panel.words.is_empty());

        // A's late response must not show up under B
        assert!(!coordinator.words_loaded("a.txt", vec![CloudWord::new("alpha", 2)]));
        assert!(coordinator.words_loaded("b.txt", vec![CloudWord::new("beta", 1)]));
    }

    #[test]
    fn test_composed_query_fills_search_box_without_searching() {
        let mut coordinator = Coordinator::new();
        let mut search_box = SearchBox::new();
        let home = HomeState::default();

        open(&mut coordinator, "a.txt");
        coordinator.words_loaded(
            "a.txt",
            vec![CloudWord::new("alpha", 4), CloudWord::new("beta", 2)],
        );
        coordinator.cloud_mut().toggle("alpha");
        coordinator.cloud_mut().toggle("beta");

        let query = coordinator.cloud_mut().compose_query().unwrap();
        assert_eq!(
            coordinator.handle(ShellMessage::ApplyCloudQuery { query }),
            Effect::CancelWordCloud
        );
        assert!(!coordinator.cloud().is_open());

        let trigger = search_box.sync_keyword(coordinator.keyword());
        assert_eq!(search_box.query(), "alpha beta");
        assert_eq!(trigger, Some(SuggestTrigger::Fetch("alpha beta".to_string())));
        assert!(!home.is_loading());
        assert!(home.last_query().is_none());
    }

    #[test]
    fn test_repeated_query_bumps_revision() {
        let mut coordinator = Coordinator::new();
        for expected in 1..=3 {
            coordinator.handle(ShellMessage::ApplyCloudQuery {
                query: "alpha".to_string(),
            });
            assert_eq!(coordinator.keyword().revision, expected);
        }
    }

    #[test]
    fn test_close_emits_no_keyword() {
        let mut coordinator = Coordinator::new();
        open(&mut coordinator, "a.txt");
        assert_eq!(
            coordinator.handle(ShellMessage::CloseWordCloud),
            Effect::CancelWordCloud
        );
        assert!(!coordinator.cloud().is_open());
        assert_eq!(coordinator.keyword(), &ExternalKeyword::default());
    }
}
