//! Filter state: the search/sort/page configuration driving the table.
//!
//! Every mutation goes through [`reduce`], which enforces the page-reset
//! rules. [`FilterStore`] couples the state with durable storage and
//! persists after every dispatched action.

use crate::model::{PageSize, SortField, SortState};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key the filter state is persisted under.
pub const FILTER_STATE_KEY: &str = "dashboard-filters";

// ===== FilterState =====

/// Combined search term, sort state, current page and page size.
///
/// Serialized in camelCase: `{search, sortState, currentPage, pageSize}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Free-text search term as typed.
    pub search: String,
    /// Active sort.
    pub sort_state: SortState,
    /// 1-based current page. Always ≥ 1.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: PageSize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_page_size(PageSize::default())
    }
}

impl FilterState {
    /// Defaults with a specific page size.
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            search: String::new(),
            sort_state: SortState::Unsorted,
            current_page: 1,
            page_size,
        }
    }
}

// ===== Restore =====

/// Persisted filter state could not be used.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// JSON did not match the expected structure.
    #[error("malformed filter state: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Structure was valid but the page number was zero.
    #[error("current page must be at least 1")]
    PageOutOfRange,
}

/// Parse and validate a persisted filter state.
///
/// Field/direction agreement and page-size membership are enforced during
/// deserialization; the page lower bound is checked afterwards.
pub fn restore(value: serde_json::Value) -> Result<FilterState, RestoreError> {
    let state: FilterState = serde_json::from_value(value)?;
    if state.current_page == 0 {
        return Err(RestoreError::PageOutOfRange);
    }
    Ok(state)
}

// ===== Reducer =====

/// A single user intent against the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the search term. Resets to page 1.
    Search(String),
    /// Select a sort column, advancing its direction cycle. Resets to page 1.
    Sort(SortField),
    /// Jump to a page. Touches nothing else.
    SetPage(usize),
    /// Change rows per page. Resets to page 1.
    SetPageSize(PageSize),
    /// Back to defaults, keeping the current page size.
    Reset,
}

/// Apply `action` to `state`.
///
/// `SetPage(0)` is normalised to page 1; no other clamping happens here.
pub fn reduce(state: FilterState, action: FilterAction) -> FilterState {
    match action {
        FilterAction::Search(search) => FilterState {
            search,
            current_page: 1,
            ..state
        },
        FilterAction::Sort(field) => FilterState {
            sort_state: state.sort_state.toggled(field),
            current_page: 1,
            ..state
        },
        FilterAction::SetPage(page) => FilterState {
            current_page: page.max(1),
            ..state
        },
        FilterAction::SetPageSize(page_size) => FilterState {
            page_size,
            current_page: 1,
            ..state
        },
        FilterAction::Reset => FilterState::with_page_size(state.page_size),
    }
}

// ===== FilterStore =====

/// Filter state bound to durable storage.
///
/// The only way to change the state is [`FilterStore::dispatch`] or
/// [`FilterStore::replace`]; both persist immediately. Storage failures are
/// logged and otherwise ignored.
#[derive(Debug)]
pub struct FilterStore<S: KeyValueStore> {
    state: FilterState,
    storage: S,
}

impl<S: KeyValueStore> FilterStore<S> {
    /// Restore from `storage`, falling back to `defaults` when nothing
    /// usable is stored.
    pub fn load(storage: S, defaults: FilterState) -> Self {
        let state = match storage.get(FILTER_STATE_KEY) {
            None => {
                debug!("No persisted filter state, using defaults");
                defaults
            }
            Some(value) => match restore(value) {
                Ok(state) => {
                    debug!(?state, "Restored persisted filter state");
                    state
                }
                Err(e) => {
                    warn!(error = %e, "Discarding persisted filter state");
                    defaults
                }
            },
        };

        Self { state, storage }
    }

    /// Current state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reduce `action` into the state and persist the result.
    ///
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: FilterAction) -> bool {
        debug!(?action, "Filter action");
        let next = reduce(self.state.clone(), action);
        let changed = next != self.state;
        self.state = next;
        self.persist();
        changed
    }

    /// Overwrite the whole state and persist it.
    pub fn replace(&mut self, state: FilterState) {
        self.state = state;
        self.persist();
    }

    fn persist(&mut self) {
        let value = match serde_json::to_value(&self.state) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to serialize filter state");
                return;
            }
        };

        if let Err(e) = self.storage.set(FILTER_STATE_KEY, value) {
            warn!(error = %e, "Failed to persist filter state");
        }
    }
}

#[cfg(test)]
#[path = "filter_state_tests.rs"]
mod tests;
