//! Domain-level keyboard actions independent of key bindings.

use crate::model::SortField;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Search
    /// Focus the search input. Default: / or Ctrl+f
    StartSearch,

    // Sorting
    /// Select a sort column, advancing its direction cycle. Default: 1/2/3
    SortBy(SortField),

    // Pagination
    /// Go to the next page (no-op on the last page). Default: →/l/n
    NextPage,
    /// Go to the previous page (no-op on page 1). Default: ←/h/p
    PrevPage,
    /// Jump to page 1. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,
    /// Cycle page size 10 → 50 → 100. Default: s
    CyclePageSize,

    // Row cursor
    /// Move the row cursor down. Default: j/↓
    RowDown,
    /// Move the row cursor up. Default: k/↑
    RowUp,
    /// Expand or collapse the selected comment body. Default: Enter/Space
    ToggleExpand,

    // Screens
    /// Open the profile screen. Default: u
    OpenProfile,
    /// Close overlay or leave the profile screen. Default: Esc
    Back,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
