//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

use std::time::Duration;

/// Height of the title bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pagination footer in lines.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the key hint bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the expanded comment pane (border included).
pub const DETAIL_PANE_HEIGHT: u16 = 8;

/// Fixed column widths of the comments table. The body column takes the rest.
pub const POST_ID_COLUMN_WIDTH: u16 = 10;
/// Width of the name column.
pub const NAME_COLUMN_WIDTH: u16 = 28;
/// Width of the email column.
pub const EMAIL_COLUMN_WIDTH: u16 = 28;

/// Minimum width of the body column.
pub const BODY_COLUMN_MIN_WIDTH: u16 = 12;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Event poll timeout. Pending fetches are checked on every tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
