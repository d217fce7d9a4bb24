//! Help overlay widget displaying keyboard shortcuts.
//!
//! Centered modal listing the shortcuts by category. Triggered by '?',
//! dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::DashboardStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Search",
        &[
            ("/  Ctrl+f", "Edit search term"),
            ("Enter", "Keep term, leave search"),
            ("Esc", "Clear term, leave search"),
        ],
    ),
    (
        "Sorting",
        &[
            ("1", "Sort by Post ID"),
            ("2", "Sort by Name"),
            ("3", "Sort by Email"),
        ],
    ),
    (
        "Pages",
        &[
            ("→  l  n", "Next page"),
            ("←  h  p", "Previous page"),
            ("g  Home", "First page"),
            ("G  End", "Last page"),
            ("s", "Cycle page size (10/50/100)"),
        ],
    ),
    (
        "Rows",
        &[
            ("j  ↓", "Next row"),
            ("k  ↑", "Previous row"),
            ("Enter  Space", "Expand or collapse comment"),
        ],
    ),
    (
        "Application",
        &[
            ("u", "Open profile"),
            ("Esc", "Back"),
            ("?", "Toggle this help"),
            ("q  Ctrl+c", "Quit"),
        ],
    ),
];

/// Width of the key column in the help table.
const KEY_COLUMN_WIDTH: usize = 14;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &DashboardStyles) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles.muted,
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Rect centered in `area` covering the given percentages.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &DashboardStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, styles.title)));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}", keys, width = KEY_COLUMN_WIDTH), styles.key),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 80, area);
        assert_eq!(rect, Rect::new(20, 5, 60, 40));
    }

    #[test]
    fn centered_rect_respects_area_offset() {
        let area = Rect::new(10, 4, 50, 20);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect, Rect::new(22, 9, 25, 10));
    }

    #[test]
    fn help_content_lists_every_category() {
        let styles = DashboardStyles::with_color_config(ColorConfig::new(false));
        let text: Vec<String> = build_help_content(&styles)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        for (category, _) in SHORTCUTS {
            assert!(text.iter().any(|l| l == *category), "missing {category}");
        }
        assert!(text.iter().any(|l| l.contains("Cycle page size")));
    }

    #[test]
    fn overlay_renders_title_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
        let styles = DashboardStyles::with_color_config(ColorConfig::new(false));
        terminal
            .draw(|frame| render_help_overlay(frame, &styles))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Press Esc or ? to close"));
    }
}
