//! Comments table and expanded-comment pane.

use crate::model::{Comment, SortDirection, SortField, SortState};
use crate::view::constants::{
    BODY_COLUMN_MIN_WIDTH, EMAIL_COLUMN_WIDTH, NAME_COLUMN_WIDTH, POST_ID_COLUMN_WIDTH,
};
use crate::view::styles::DashboardStyles;
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};
use std::collections::HashSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Gap between table columns.
const COLUMN_SPACING: u16 = 1;

/// Indicator for a column's place in the sort cycle.
pub fn sort_indicator(sort: SortState, field: SortField) -> &'static str {
    match sort.direction_of(field) {
        SortDirection::None => "⇅",
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    }
}

/// Collapse all whitespace runs (newlines included) to single spaces.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max_width` display columns, marking the cut
/// with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Width left for the body column inside a bordered table of `area_width`.
fn body_column_width(area_width: u16) -> u16 {
    let fixed = POST_ID_COLUMN_WIDTH + NAME_COLUMN_WIDTH + EMAIL_COLUMN_WIDTH;
    area_width
        .saturating_sub(2) // borders
        .saturating_sub(fixed)
        .saturating_sub(3 * COLUMN_SPACING)
        .max(BODY_COLUMN_MIN_WIDTH)
}

/// Inputs for one table frame.
pub struct CommentsTable<'a> {
    /// Visible page.
    pub rows: &'a [Comment],
    /// Active sort, for header indicators.
    pub sort: SortState,
    /// Row cursor.
    pub selected: usize,
    /// Ids with an open body.
    pub expanded: &'a HashSet<u64>,
    /// Styles.
    pub styles: &'a DashboardStyles,
}

impl CommentsTable<'_> {
    fn header(&self) -> Row<'static> {
        let sortable = SortField::ALL.iter().map(|&field| {
            let style = if self.sort.field() == Some(field) {
                self.styles.active_sort
            } else {
                self.styles.table_header
            };
            Cell::from(format!("{} {}", field.label(), sort_indicator(self.sort, field)))
                .style(style)
        });

        Row::new(sortable.chain(std::iter::once(
            Cell::from("Comment").style(self.styles.table_header),
        )))
        .style(self.styles.table_header)
    }

    fn row(&self, comment: &Comment, body_width: usize) -> Row<'static> {
        let marker = if self.expanded.contains(&comment.id) {
            "▾ "
        } else {
            "▸ "
        };
        let body = truncate_to_width(
            &single_line(&comment.body),
            body_width.saturating_sub(marker.width()),
        );

        Row::new(vec![
            Cell::from(comment.post_id.to_string()),
            Cell::from(truncate_to_width(&comment.name, NAME_COLUMN_WIDTH as usize)),
            Cell::from(truncate_to_width(&comment.email, EMAIL_COLUMN_WIDTH as usize)),
            Cell::from(format!("{marker}{body}")),
        ])
    }

    /// Draw the table with the cursor row highlighted.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let body_width = body_column_width(area.width);
        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|comment| self.row(comment, body_width as usize))
            .collect();

        let widths = [
            Constraint::Length(POST_ID_COLUMN_WIDTH),
            Constraint::Length(NAME_COLUMN_WIDTH),
            Constraint::Length(EMAIL_COLUMN_WIDTH),
            Constraint::Min(BODY_COLUMN_MIN_WIDTH),
        ];

        let table = Table::new(rows, widths)
            .header(self.header())
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(self.styles.selected_row)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.border)
                    .title(" Comments "),
            );

        let selected = self.selected.min(self.rows.len().saturating_sub(1));
        let mut state = TableState::default().with_selected(Some(selected));
        frame.render_stateful_widget(table, area, &mut state);
    }
}

/// Bordered message in place of the table (loading, error, no results).
pub fn render_table_message(frame: &mut Frame, area: Rect, message: Line<'_>, styles: &DashboardStyles) {
    let paragraph = Paragraph::new(message).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border)
            .title(" Comments "),
    );
    frame.render_widget(paragraph, area);
}

/// Full body of an expanded comment.
pub fn render_detail_pane(frame: &mut Frame, area: Rect, comment: &Comment, styles: &DashboardStyles) {
    let mut lines = vec![Line::from(Span::styled(comment.email.clone(), styles.muted))];
    lines.extend(comment.body.lines().map(|l| Line::from(l.to_string())));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border)
            .title(format!(" #{} {} ", comment.id, comment.name)),
    );
    frame.render_widget(paragraph, area);
}
