//! Search input editing (pure state transitions).
//!
//! The term itself lives in the filter state; while the input has focus the
//! shell keeps a cursor next to it. Cursor positions count characters, not
//! bytes.

/// Whether the search input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchInputState {
    /// Keys are routed to key bindings.
    #[default]
    Inactive,
    /// Printable keys edit the term.
    Editing {
        /// Character offset of the cursor within the term.
        cursor: usize,
    },
}

impl SearchInputState {
    /// Focus the input with the cursor at the end of `term`.
    pub fn focus(term: &str) -> Self {
        SearchInputState::Editing {
            cursor: term.chars().count(),
        }
    }

    /// Cursor position while editing.
    pub fn cursor(self) -> Option<usize> {
        match self {
            SearchInputState::Inactive => None,
            SearchInputState::Editing { cursor } => Some(cursor),
        }
    }

    /// True while editing.
    pub fn is_editing(self) -> bool {
        matches!(self, SearchInputState::Editing { .. })
    }
}

/// Term plus cursor being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEdit {
    /// Term being edited.
    pub text: String,
    /// Character offset of the cursor.
    pub cursor: usize,
}

impl SearchEdit {
    /// Start editing `text` with the cursor clamped to its length.
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = cursor.min(text.chars().count());
        Self { text, cursor }
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(edit: SearchEdit, ch: char) -> SearchEdit {
    let SearchEdit { mut text, cursor } = edit;
    text.insert(byte_offset(&text, cursor), ch);
    SearchEdit {
        text,
        cursor: cursor + 1,
    }
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(edit: SearchEdit) -> SearchEdit {
    let SearchEdit { mut text, cursor } = edit;
    if cursor == 0 {
        return SearchEdit { text, cursor };
    }
    text.remove(byte_offset(&text, cursor - 1));
    SearchEdit {
        text,
        cursor: cursor - 1,
    }
}

/// Move cursor left by one position, saturating at 0.
pub fn handle_cursor_left(edit: SearchEdit) -> SearchEdit {
    SearchEdit {
        cursor: edit.cursor.saturating_sub(1),
        ..edit
    }
}

/// Move cursor right by one position, saturating at the end.
pub fn handle_cursor_right(edit: SearchEdit) -> SearchEdit {
    let max_cursor = edit.text.chars().count();
    SearchEdit {
        cursor: (edit.cursor + 1).min(max_cursor),
        ..edit
    }
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
