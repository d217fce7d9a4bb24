//! Screen layout.
//!
//! Splits the frame into header, search bar, table, optional detail pane,
//! footer and status bar, and routes each area to its widget.

use crate::state::{AppState, RemoteData, Screen};
use crate::view::constants::{
    DETAIL_PANE_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::view::help::render_help_overlay;
use crate::view::pagination::render_footer;
use crate::view::profile::render_profile;
use crate::view::search_input::SearchInput;
use crate::view::styles::DashboardStyles;
use crate::view::table::{render_detail_pane, render_table_message, CommentsTable};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole frame for the current screen.
///
/// Takes the state mutably only to read the pipeline cache.
pub fn render_layout(frame: &mut Frame, state: &mut AppState, styles: &DashboardStyles) {
    match state.screen {
        Screen::Dashboard => render_dashboard(frame, state, styles),
        Screen::Profile => render_profile_screen(frame, state, styles),
    }

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

fn render_dashboard(frame: &mut Frame, state: &mut AppState, styles: &DashboardStyles) {
    let expanded_comment = state
        .selected_comment()
        .filter(|comment| state.expanded.contains(&comment.id));
    let detail_height = if expanded_comment.is_some() {
        DETAIL_PANE_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(detail_height),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], "Comments Dashboard", styles);

    frame.render_widget(
        SearchInput::new(&state.filters().search, state.search_input, styles),
        chunks[1],
    );

    render_table_area(frame, chunks[2], state, styles);

    if let Some(comment) = &expanded_comment {
        render_detail_pane(frame, chunks[3], comment, styles);
    }

    let info = state.view().info;
    render_footer(frame, chunks[4], &info, styles);

    render_status_bar(
        frame,
        chunks[5],
        &[
            ("/", "search"),
            ("1/2/3", "sort"),
            ("←/→", "page"),
            ("s", "page size"),
            ("Enter", "expand"),
            ("u", "profile"),
            ("?", "help"),
            ("q", "quit"),
        ],
        styles,
    );
}

fn render_table_area(frame: &mut Frame, area: Rect, state: &mut AppState, styles: &DashboardStyles) {
    match &state.comments {
        RemoteData::Loading => {
            render_table_message(frame, area, Line::from("Loading comments..."), styles);
            return;
        }
        RemoteData::Failed(message) => {
            let line = Line::from(vec![
                Span::styled("Error loading comments: ", styles.error),
                Span::raw(message.clone()),
            ]);
            render_table_message(frame, area, line, styles);
            return;
        }
        RemoteData::Loaded(_) => {}
    }

    let sort = state.filters().sort_state;
    let selected = state.selected_row;
    let (view, expanded) = state.view_and_expanded();

    if view.rows.is_empty() {
        render_table_message(
            frame,
            area,
            Line::from(Span::styled("No comments found", styles.muted)),
            styles,
        );
        return;
    }

    CommentsTable {
        rows: &view.rows,
        sort,
        selected,
        expanded,
        styles,
    }
    .render(frame, area);
}

fn render_profile_screen(frame: &mut Frame, state: &AppState, styles: &DashboardStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], "User Profile", styles);
    render_profile(frame, chunks[1], &state.profile, styles);
    render_status_bar(
        frame,
        chunks[2],
        &[("Esc", "back to dashboard"), ("?", "help"), ("q", "quit")],
        styles,
    );
}

fn render_header(frame: &mut Frame, area: Rect, title: &str, styles: &DashboardStyles) {
    let line = Line::from(Span::styled(format!(" {title} "), styles.title));
    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints: `key: action | key: action ...`.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    styles: &DashboardStyles,
) {
    let mut spans = vec![Span::raw(" ")];
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", styles.muted));
        }
        spans.push(Span::styled(key.to_string(), styles.key));
        spans.push(Span::styled(format!(": {action}"), styles.muted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
