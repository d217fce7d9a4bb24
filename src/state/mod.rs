//! UI state machine and data pipeline (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod dashboard_handler;
pub mod filter_state;
pub mod pagination;
pub mod pipeline;
pub mod search;
pub mod search_input_handler;
pub mod sort;

// Re-export for convenience
pub use app_state::{AppState, RemoteData, Screen};
pub use dashboard_handler::{handle_dashboard_action, handle_search_key, SearchKey};
pub use filter_state::{reduce, restore, FilterAction, FilterState, FilterStore, FILTER_STATE_KEY};
pub use pagination::{page_numbers, paginate, Page, PageLink, PaginationInfo, MAX_VISIBLE_PAGES};
pub use pipeline::{process, PipelineCache, ProcessedPage, ProcessedView};
pub use search::{search_comments, SearchField};
pub use search_input_handler::{SearchEdit, SearchInputState};
pub use sort::{compare_by_field, locale_collator, locale_compare, sort_comments};
