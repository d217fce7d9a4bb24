//! Dashboard styling.
//!
//! All colours flow through [`DashboardStyles`], which collapses to
//! modifier-only styling when colours are disabled.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Colours are off if `--no-color` was passed or `NO_COLOR` is set to
    /// any value.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== DashboardStyles =====

/// Styles for every dashboard element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStyles {
    /// Screen title in the header.
    pub title: Style,
    /// Column headers.
    pub table_header: Style,
    /// Header of the sorted column.
    pub active_sort: Style,
    /// Row under the cursor.
    pub selected_row: Style,
    /// Current page number in the footer.
    pub current_page: Style,
    /// Other page numbers.
    pub page_link: Style,
    /// Unavailable previous/next arrows.
    pub disabled: Style,
    /// Error messages.
    pub error: Style,
    /// Secondary text.
    pub muted: Style,
    /// Key names in hints and help.
    pub key: Style,
    /// Block borders.
    pub border: Style,
    /// Profile initials badge.
    pub avatar: Style,
}

impl DashboardStyles {
    /// Styles for the given colour configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);

        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Cyan),
                table_header: bold.fg(Color::White).bg(Color::DarkGray),
                active_sort: bold.fg(Color::Yellow).bg(Color::DarkGray),
                selected_row: Style::default().bg(Color::Blue).fg(Color::White),
                current_page: bold.fg(Color::Black).bg(Color::Cyan),
                page_link: Style::default().fg(Color::Cyan),
                disabled: Style::default().fg(Color::DarkGray),
                error: bold.fg(Color::Red),
                muted: Style::default().fg(Color::Gray),
                key: bold.fg(Color::Yellow),
                border: Style::default().fg(Color::Cyan),
                avatar: bold.fg(Color::Black).bg(Color::Cyan),
            }
        } else {
            Self {
                title: bold,
                table_header: bold,
                active_sort: bold.add_modifier(Modifier::UNDERLINED),
                selected_row: Style::default().add_modifier(Modifier::REVERSED),
                current_page: bold.add_modifier(Modifier::REVERSED),
                page_link: Style::default(),
                disabled: Style::default().add_modifier(Modifier::DIM),
                error: bold,
                muted: Style::default(),
                key: bold,
                border: Style::default(),
                avatar: bold.add_modifier(Modifier::REVERSED),
            }
        }
    }
}

impl Default for DashboardStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color)]
    fn no_color_flag_disables_colors() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");

        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn colors_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    fn disabled_styles_carry_no_colors() {
        let styles = DashboardStyles::with_color_config(ColorConfig::new(false));
        for style in [
            styles.title,
            styles.selected_row,
            styles.current_page,
            styles.error,
        ] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
    }

    #[test]
    fn selected_row_is_distinguishable_without_color() {
        let styles = DashboardStyles::with_color_config(ColorConfig::new(false));
        assert!(styles
            .selected_row
            .add_modifier
            .contains(Modifier::REVERSED));
    }

    #[test]
    fn enabled_styles_use_colors() {
        let styles = DashboardStyles::with_color_config(ColorConfig::new(true));
        assert_eq!(styles.error.fg, Some(Color::Red));
    }
}
