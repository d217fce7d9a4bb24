//! Tests for the dashboard action handler.

use super::*;
use crate::model::{Comment, FetchError, PageSize, SortField, SortState};
use crate::state::filter_state::{FilterState, FilterStore};
use crate::storage::{KeyValueStore, MemoryStore};

fn comments(n: u64) -> Vec<Comment> {
    (1..=n)
        .map(|id| {
            Comment::new(
                (id - 1) / 5 + 1,
                id,
                format!("name {id}"),
                format!("u{id}@x.io"),
                "body",
            )
        })
        .collect()
}

fn loaded_state(n: u64) -> AppState {
    let storage: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    let mut state = AppState::new(FilterStore::load(storage, FilterState::default()));
    state.set_comments(Ok(comments(n)));
    state
}

fn press(mut state: AppState, actions: &[KeyAction]) -> AppState {
    for action in actions {
        handle_dashboard_action(&mut state, *action);
    }
    state
}

fn type_keys(mut state: AppState, keys: &[SearchKey]) -> AppState {
    for key in keys {
        handle_search_key(&mut state, *key);
    }
    state
}

// ===== Pagination =====

#[test]
fn next_page_advances() {
    let state = press(loaded_state(25), &[KeyAction::NextPage]);
    assert_eq!(state.filters().current_page, 2);
}

#[test]
fn next_page_is_noop_on_last_page() {
    let state = press(
        loaded_state(25),
        &[KeyAction::NextPage, KeyAction::NextPage, KeyAction::NextPage],
    );
    assert_eq!(state.filters().current_page, 3);
}

#[test]
fn prev_page_is_noop_on_first_page() {
    let state = press(loaded_state(25), &[KeyAction::PrevPage]);
    assert_eq!(state.filters().current_page, 1);
}

#[test]
fn next_page_is_noop_with_no_records() {
    let state = press(loaded_state(0), &[KeyAction::NextPage]);
    assert_eq!(state.filters().current_page, 1);
}

#[test]
fn last_then_first_page() {
    let mut state = press(loaded_state(25), &[KeyAction::LastPage]);
    assert_eq!(state.filters().current_page, 3);
    assert_eq!(state.view().rows.len(), 5);

    let state = press(state, &[KeyAction::FirstPage]);
    assert_eq!(state.filters().current_page, 1);
}

#[test]
fn last_page_on_empty_collection_stays_on_one() {
    let state = press(loaded_state(0), &[KeyAction::LastPage]);
    assert_eq!(state.filters().current_page, 1);
}

#[test]
fn cycle_page_size_wraps_and_resets_page() {
    let state = press(
        loaded_state(250),
        &[KeyAction::NextPage, KeyAction::CyclePageSize],
    );
    assert_eq!(state.filters().page_size, PageSize::Fifty);
    assert_eq!(state.filters().current_page, 1);

    let state = press(state, &[KeyAction::CyclePageSize, KeyAction::CyclePageSize]);
    assert_eq!(state.filters().page_size, PageSize::Ten);
}

// ===== Sorting =====

#[test]
fn sort_key_cycles_direction_and_resets_page() {
    let state = press(
        loaded_state(25),
        &[KeyAction::NextPage, KeyAction::SortBy(SortField::Name)],
    );
    assert_eq!(
        state.filters().sort_state,
        SortState::ascending(SortField::Name)
    );
    assert_eq!(state.filters().current_page, 1);

    let state = press(
        state,
        &[
            KeyAction::SortBy(SortField::Name),
            KeyAction::SortBy(SortField::Name),
        ],
    );
    assert_eq!(state.filters().sort_state, SortState::Unsorted);
}

#[test]
fn descending_post_id_shows_highest_first() {
    let mut state = press(
        loaded_state(25),
        &[
            KeyAction::SortBy(SortField::PostId),
            KeyAction::SortBy(SortField::PostId),
        ],
    );
    assert_eq!(state.view().rows[0].post_id, 5);
}

// ===== Row cursor =====

#[test]
fn row_cursor_clamps_to_visible_page() {
    let actions = vec![KeyAction::RowDown; 15];
    let state = press(loaded_state(25), &actions);
    assert_eq!(state.selected_row, 9);

    let state = press(state, &[KeyAction::RowUp]);
    assert_eq!(state.selected_row, 8);
}

#[test]
fn row_up_saturates_at_zero() {
    let state = press(loaded_state(3), &[KeyAction::RowUp]);
    assert_eq!(state.selected_row, 0);
}

#[test]
fn toggle_expand_uses_selected_comment_id() {
    let state = press(
        loaded_state(25),
        &[KeyAction::RowDown, KeyAction::ToggleExpand],
    );
    assert!(state.expanded.contains(&2));

    let state = press(state, &[KeyAction::ToggleExpand]);
    assert!(state.expanded.is_empty());
}

#[test]
fn toggle_expand_on_empty_page_is_noop() {
    let mut state = loaded_state(0);
    state.set_comments(Err(FetchError::Status { status: 500 }));
    let state = press(state, &[KeyAction::ToggleExpand]);
    assert!(state.expanded.is_empty());
}

// ===== Screens and overlays =====

#[test]
fn help_toggles_and_swallows_other_keys() {
    let state = press(loaded_state(25), &[KeyAction::Help, KeyAction::NextPage]);
    assert!(state.help_visible);
    assert_eq!(state.filters().current_page, 1);

    let state = press(state, &[KeyAction::Back]);
    assert!(!state.help_visible);
}

#[test]
fn profile_round_trip() {
    let state = press(loaded_state(25), &[KeyAction::OpenProfile]);
    assert_eq!(state.screen, Screen::Profile);

    // Dashboard keys do nothing on the profile screen
    let state = press(state, &[KeyAction::NextPage]);
    assert_eq!(state.filters().current_page, 1);

    let state = press(state, &[KeyAction::Back]);
    assert_eq!(state.screen, Screen::Dashboard);
}

// ===== Search input =====

#[test]
fn start_search_focuses_at_end_of_term() {
    let mut state = loaded_state(25);
    state.dispatch(FilterAction::Search("ab".to_string()));
    let state = press(state, &[KeyAction::StartSearch]);
    assert_eq!(state.search_input, SearchInputState::Editing { cursor: 2 });
}

#[test]
fn typing_filters_live_and_resets_page() {
    let state = press(
        loaded_state(25),
        &[KeyAction::NextPage, KeyAction::StartSearch],
    );
    let mut state = type_keys(
        state,
        &[SearchKey::Char('1'), SearchKey::Char('2')],
    );

    assert_eq!(state.filters().search, "12");
    assert_eq!(state.filters().current_page, 1);
    // "name 12" and "u12@x.io" both belong to id 12
    assert_eq!(state.view().info.total_items, 1);
}

#[test]
fn backspace_and_cursor_moves_edit_in_place() {
    let state = press(loaded_state(5), &[KeyAction::StartSearch]);
    let state = type_keys(
        state,
        &[
            SearchKey::Char('a'),
            SearchKey::Char('c'),
            SearchKey::Left,
            SearchKey::Char('b'),
            SearchKey::Right,
            SearchKey::Backspace,
        ],
    );
    assert_eq!(state.filters().search, "ab");
    assert_eq!(state.search_input.cursor(), Some(2));
}

#[test]
fn submit_keeps_term() {
    let state = press(loaded_state(5), &[KeyAction::StartSearch]);
    let state = type_keys(state, &[SearchKey::Char('x'), SearchKey::Submit]);
    assert_eq!(state.filters().search, "x");
    assert!(!state.search_input.is_editing());
}

#[test]
fn cancel_clears_term() {
    let state = press(loaded_state(5), &[KeyAction::StartSearch]);
    let state = type_keys(state, &[SearchKey::Char('x'), SearchKey::Cancel]);
    assert_eq!(state.filters().search, "");
    assert!(!state.search_input.is_editing());
}

#[test]
fn search_keys_ignored_when_not_focused() {
    let state = type_keys(loaded_state(5), &[SearchKey::Char('x')]);
    assert_eq!(state.filters().search, "");
}

#[test]
fn cursor_move_alone_does_not_reset_page() {
    let mut state = press(loaded_state(25), &[KeyAction::NextPage]);
    state.search_input = SearchInputState::focus("");
    let state = type_keys(state, &[SearchKey::Left]);
    assert_eq!(state.filters().current_page, 2);
}
