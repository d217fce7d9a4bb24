//! Profile page: the first user of the users endpoint.

use crate::model::User;
use crate::state::RemoteData;
use crate::view::styles::DashboardStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the label column in the profile card.
const LABEL_WIDTH: usize = 10;

fn field_line(label: &str, value: String, styles: &DashboardStyles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<width$}", label, width = LABEL_WIDTH), styles.muted),
        Span::raw(value),
    ])
}

/// Card lines for a loaded user.
pub fn profile_lines(user: &User, styles: &DashboardStyles) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!(" {} ", user.initials()), styles.avatar),
            Span::raw("  "),
            Span::styled(format!("Welcome, {}", user.name), styles.title),
        ]),
        Line::from(Span::styled(format!("       {}", user.email), styles.muted)),
        Line::default(),
        field_line("User ID", user.display_id(), styles),
        field_line("Name", user.name.clone(), styles),
        field_line("Email ID", user.email.clone(), styles),
        field_line("Address", user.display_address(), styles),
        field_line("Phone", user.phone.clone(), styles),
    ]
}

/// Centered status lines for the non-loaded states.
fn status_lines(profile: &RemoteData<Vec<User>>, styles: &DashboardStyles) -> Vec<Line<'static>> {
    let back_hint = Line::from(Span::styled("Esc: Back to Dashboard", styles.muted));
    match profile {
        RemoteData::Loading => vec![Line::from("Loading profile...")],
        RemoteData::Failed(message) => vec![
            Line::from(Span::styled("Error loading profile", styles.error)),
            Line::from(message.clone()),
            Line::default(),
            back_hint,
        ],
        RemoteData::Loaded(_) => vec![
            Line::from("No user data found"),
            Line::default(),
            back_hint,
        ],
    }
}

/// Draw the profile page body.
pub fn render_profile(
    frame: &mut Frame,
    area: Rect,
    profile: &RemoteData<Vec<User>>,
    styles: &DashboardStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border)
        .title(" Profile ");

    let user = profile.loaded().and_then(|users| users.first());
    let paragraph = match user {
        Some(user) => Paragraph::new(profile_lines(user, styles)),
        None => Paragraph::new(status_lines(profile, styles)).alignment(Alignment::Center),
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
