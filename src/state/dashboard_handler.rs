//! Dashboard keyboard action handler.
//!
//! State transitions applied to AppState in response to key actions and
//! search-input keys. Quitting and starting fetches are left to the shell.

use crate::model::KeyAction;
use crate::state::app_state::{AppState, Screen};
use crate::state::filter_state::FilterAction;
use crate::state::search_input_handler::{
    handle_backspace, handle_char_input, handle_cursor_left, handle_cursor_right, SearchEdit,
    SearchInputState,
};

/// Handle a key action on the dashboard or profile screen.
///
/// Page moves read the current pagination info, so previous/next are no-ops
/// at the first/last page. `Quit` is ignored here.
pub fn handle_dashboard_action(state: &mut AppState, action: KeyAction) {
    // Esc closes the help overlay before anything else
    if state.help_visible {
        if matches!(action, KeyAction::Help | KeyAction::Back) {
            state.help_visible = false;
        }
        return;
    }

    if state.screen == Screen::Profile {
        match action {
            KeyAction::Back => state.close_profile(),
            KeyAction::Help => state.help_visible = true,
            _ => {}
        }
        return;
    }

    let info = state.view().info;

    match action {
        KeyAction::StartSearch => {
            state.search_input = SearchInputState::focus(&state.filters().search);
        }
        KeyAction::SortBy(field) => state.dispatch(FilterAction::Sort(field)),
        KeyAction::NextPage => {
            if info.has_next() {
                state.dispatch(FilterAction::SetPage(info.current_page + 1));
            }
        }
        KeyAction::PrevPage => {
            if info.has_previous() {
                state.dispatch(FilterAction::SetPage(info.current_page - 1));
            }
        }
        KeyAction::FirstPage => state.dispatch(FilterAction::SetPage(1)),
        KeyAction::LastPage => state.dispatch(FilterAction::SetPage(info.total_pages.max(1))),
        KeyAction::CyclePageSize => {
            let next = state.filters().page_size.next();
            state.dispatch(FilterAction::SetPageSize(next));
        }
        KeyAction::RowDown => {
            let last = info.visible_len().saturating_sub(1);
            state.selected_row = (state.selected_row + 1).min(last);
        }
        KeyAction::RowUp => {
            state.selected_row = state.selected_row.saturating_sub(1);
        }
        KeyAction::ToggleExpand => {
            if let Some(comment) = state.selected_comment() {
                if !state.expanded.remove(&comment.id) {
                    state.expanded.insert(comment.id);
                }
            }
        }
        KeyAction::OpenProfile => state.open_profile(),
        KeyAction::Help => state.help_visible = true,
        KeyAction::Back | KeyAction::Quit => {}
    }
}

/// Keys understood while the search input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    /// Insert a character at the cursor.
    Char(char),
    /// Delete before the cursor.
    Backspace,
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// Keep the term and leave the input.
    Submit,
    /// Clear the term and leave the input.
    Cancel,
}

/// Handle a key while the search input has focus.
///
/// Every edit routes the new term through the reducer so results update
/// live. No-op when the input is not focused.
pub fn handle_search_key(state: &mut AppState, key: SearchKey) {
    let Some(cursor) = state.search_input.cursor() else {
        return;
    };
    let edit = SearchEdit::new(state.filters().search.clone(), cursor);

    let edited = match key {
        SearchKey::Char(ch) => handle_char_input(edit, ch),
        SearchKey::Backspace => handle_backspace(edit),
        SearchKey::Left => handle_cursor_left(edit),
        SearchKey::Right => handle_cursor_right(edit),
        SearchKey::Submit => {
            state.search_input = SearchInputState::Inactive;
            return;
        }
        SearchKey::Cancel => {
            state.search_input = SearchInputState::Inactive;
            state.dispatch(FilterAction::Search(String::new()));
            return;
        }
    };

    state.search_input = SearchInputState::Editing {
        cursor: edited.cursor,
    };
    if edited.text != state.filters().search {
        state.dispatch(FilterAction::Search(edited.text));
    }
}

#[cfg(test)]
#[path = "dashboard_handler_tests.rs"]
mod tests;
