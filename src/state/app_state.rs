//! Application state and transitions.
//!
//! AppState is the root state type for the dashboard. It owns the filter
//! store, the status of both remote collections, and the UI-only bits
//! (screen, row cursor, expanded bodies, search focus, help overlay).
//! Side effects (starting fetches, drawing) live in the view layer.

use crate::model::{Comment, FetchError, User};
use crate::state::filter_state::{FilterAction, FilterState, FilterStore};
use crate::state::pipeline::{PipelineCache, ProcessedView};
use crate::state::search_input_handler::SearchInputState;
use crate::storage::KeyValueStore;
use std::collections::HashSet;
use tracing::debug;

// ===== RemoteData =====

/// Status of a collection fetched from a record source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RemoteData<T> {
    /// Request in flight.
    #[default]
    Loading,
    /// Request completed.
    Loaded(T),
    /// Request failed; the message is shown to the user.
    Failed(String),
}

impl<T> RemoteData<T> {
    /// Wrap a fetch outcome.
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => RemoteData::Loaded(value),
            Err(e) => RemoteData::Failed(e.to_string()),
        }
    }

    /// Request still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    /// Loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            RemoteData::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteData::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Records available to the pipeline. Empty unless loaded.
fn records_of(data: &RemoteData<Vec<Comment>>) -> &[Comment] {
    data.loaded().map(Vec::as_slice).unwrap_or(&[])
}

// ===== Screen =====

/// Which page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Comments table.
    #[default]
    Dashboard,
    /// User profile card.
    Profile,
}

// ===== AppState =====

/// Root application state. Pure data, no I/O beyond the filter store's
/// persistence.
#[derive(Debug)]
pub struct AppState {
    /// Current screen.
    pub screen: Screen,
    /// Comment collection status.
    pub comments: RemoteData<Vec<Comment>>,
    /// User list status for the profile page.
    pub profile: RemoteData<Vec<User>>,
    /// Search input focus and cursor.
    pub search_input: SearchInputState,
    /// Row cursor within the visible page (0-based).
    pub selected_row: usize,
    /// Ids of comments whose body is expanded.
    pub expanded: HashSet<u64>,
    /// Help overlay visibility.
    pub help_visible: bool,
    filters: FilterStore<Box<dyn KeyValueStore>>,
    data_generation: u64,
    cache: PipelineCache,
}

impl AppState {
    /// Fresh state around a loaded filter store. Comments start loading.
    pub fn new(filters: FilterStore<Box<dyn KeyValueStore>>) -> Self {
        Self {
            screen: Screen::Dashboard,
            comments: RemoteData::Loading,
            profile: RemoteData::Loading,
            search_input: SearchInputState::Inactive,
            selected_row: 0,
            expanded: HashSet::new(),
            help_visible: false,
            filters,
            data_generation: 0,
            cache: PipelineCache::new(),
        }
    }

    /// Current filter state.
    pub fn filters(&self) -> &FilterState {
        self.filters.state()
    }

    /// Route a user intent through the filter reducer.
    ///
    /// The row cursor returns to the top whenever the state changes.
    pub fn dispatch(&mut self, action: FilterAction) {
        if self.filters.dispatch(action) {
            self.selected_row = 0;
        }
    }

    /// Overwrite the filter state wholesale (used by `--reset-state`).
    pub fn replace_filters(&mut self, state: FilterState) {
        self.filters.replace(state);
        self.selected_row = 0;
    }

    /// Record the outcome of the comments fetch.
    ///
    /// A failure leaves the collection empty and keeps the message.
    pub fn set_comments(&mut self, result: Result<Vec<Comment>, FetchError>) {
        self.comments = RemoteData::from_result(result);
        self.data_generation += 1;
        self.selected_row = 0;
        self.expanded.clear();
        debug!(generation = self.data_generation, "Comment collection replaced");
    }

    /// Record the outcome of the profile fetch.
    pub fn set_profile(&mut self, result: Result<Vec<User>, FetchError>) {
        self.profile = RemoteData::from_result(result);
    }

    /// Bumped every time the comment collection is replaced.
    pub fn data_generation(&self) -> u64 {
        self.data_generation
    }

    /// The visible page and its metadata.
    pub fn view(&mut self) -> &ProcessedView {
        self.cache.get_or_compute(
            self.data_generation,
            records_of(&self.comments),
            self.filters.state(),
        )
    }

    /// The visible page alongside the expanded set, for rendering.
    pub fn view_and_expanded(&mut self) -> (&ProcessedView, &HashSet<u64>) {
        let view = self.cache.get_or_compute(
            self.data_generation,
            records_of(&self.comments),
            self.filters.state(),
        );
        (view, &self.expanded)
    }

    /// Comment under the row cursor.
    pub fn selected_comment(&mut self) -> Option<Comment> {
        let row = self.selected_row;
        self.view().rows.get(row).cloned()
    }

    /// Switch to the profile page. The user list is fetched again on every
    /// visit.
    pub fn open_profile(&mut self) {
        self.screen = Screen::Profile;
        self.profile = RemoteData::Loading;
        self.help_visible = false;
        debug!("Opened profile");
    }

    /// Back to the dashboard.
    pub fn close_profile(&mut self) {
        self.screen = Screen::Dashboard;
        debug!("Closed profile");
    }

    /// First user of the loaded list, if any.
    pub fn profile_user(&self) -> Option<&User> {
        self.profile.loaded().and_then(|users| users.first())
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
