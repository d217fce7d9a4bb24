//! Search input widget for rendering the search bar.

use crate::state::SearchInputState;
use crate::view::styles::DashboardStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown when the term is empty and the input is not focused.
pub const SEARCH_PLACEHOLDER: &str = "Search by name, email or comment  (press / to edit)";

/// Search bar. Shows a cursor while editing, the current term otherwise.
pub struct SearchInput<'a> {
    term: &'a str,
    input: SearchInputState,
    styles: &'a DashboardStyles,
}

impl<'a> SearchInput<'a> {
    /// Search bar showing `term` with the cursor from `input`.
    pub fn new(term: &'a str, input: SearchInputState, styles: &'a DashboardStyles) -> Self {
        Self {
            term,
            input,
            styles,
        }
    }
}

/// Split `term` around a character cursor: (before, under cursor, after).
///
/// At the end of the term the cursor sits on a trailing space.
fn split_at_cursor(term: &str, cursor: usize) -> (String, String, String) {
    let before: String = term.chars().take(cursor).collect();
    let mut rest = term.chars().skip(cursor);
    let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = rest.collect();
    (before, under, after)
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, title, border) = match self.input {
            SearchInputState::Editing { cursor } => {
                let (before, under, after) = split_at_cursor(self.term, cursor);
                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
                    Span::raw(after),
                ]);
                (line, " Search (Enter: keep, Esc: clear) ", self.styles.border)
            }
            SearchInputState::Inactive if self.term.is_empty() => (
                Line::from(Span::styled(SEARCH_PLACEHOLDER, self.styles.muted)),
                " Search ",
                Style::default(),
            ),
            SearchInputState::Inactive => (
                Line::from(self.term.to_string()),
                " Search ",
                Style::default(),
            ),
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(term: &str, input: SearchInputState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let styles = DashboardStyles::with_color_config(ColorConfig::new(false));
        terminal
            .draw(|frame| {
                frame.render_widget(SearchInput::new(term, input, &styles), frame.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn split_at_cursor_middle() {
        assert_eq!(
            split_at_cursor("abcd", 2),
            ("ab".to_string(), "c".to_string(), "d".to_string())
        );
    }

    #[test]
    fn split_at_cursor_end_uses_space() {
        assert_eq!(
            split_at_cursor("ab", 2),
            ("ab".to_string(), " ".to_string(), String::new())
        );
    }

    #[test]
    fn split_at_cursor_counts_characters() {
        assert_eq!(
            split_at_cursor("héllo", 2),
            ("hé".to_string(), "l".to_string(), "lo".to_string())
        );
    }

    #[test]
    fn inactive_empty_shows_placeholder() {
        let text = render_to_string("", SearchInputState::Inactive);
        assert!(text.contains("Search by name"));
    }

    #[test]
    fn inactive_shows_term() {
        let text = render_to_string("laudantium", SearchInputState::Inactive);
        assert!(text.contains("laudantium"));
        assert!(!text.contains("Search by name"));
    }

    #[test]
    fn editing_shows_hint_in_title() {
        let text = render_to_string("abc", SearchInputState::Editing { cursor: 1 });
        assert!(text.contains("Enter: keep"));
        assert!(text.contains("abc"));
    }
}
