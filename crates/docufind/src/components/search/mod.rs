//! Search components: the autosuggest search bar and the paginated results.

mod result_card;
mod results_list;
mod search_bar;

pub use result_card::ResultCard;
pub use results_list::ResultsList;
pub use search_bar::SearchBar;
