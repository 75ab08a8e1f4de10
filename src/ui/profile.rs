//! The profile screen: identity card plus the My Lines / Bookmarked tabs.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::feed::render_line_list;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_PREMIUM};
use crate::app::{App, ProfileTab};

pub fn render_profile_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let Some(session) = app.session.as_ref() else {
        // Anonymous viewers never reach this screen; render nothing.
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // identity card
            Constraint::Min(1),    // tabs
        ])
        .split(area);

    let name_line = match app.username_edit.as_deref() {
        Some(edited) => Line::from(vec![
            Span::styled("Username: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("{}_", edited),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [Enter] Save  [Esc] Cancel", Style::default().fg(COLOR_DIM)),
        ]),
        None => {
            let mut spans = vec![Span::styled(
                format!("@{}", session.username()),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            )];
            if session.is_premium() {
                spans.push(Span::styled(" ♛", Style::default().fg(COLOR_PREMIUM)));
            }
            spans.push(Span::styled("  [e] Edit username", Style::default().fg(COLOR_DIM)));
            Line::from(spans)
        }
    };

    let email = session.email.as_deref().unwrap_or("-");
    let account_type = if session.is_premium() { "Premium" } else { "Free" };
    let card = Paragraph::new(vec![
        name_line,
        Line::from(Span::styled(
            format!("Email: {}", email),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            format!("Account Type: {}", account_type),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            "[Tab] Switch tab  [l]ike [b]ookmark  [Esc] Back to feed",
            Style::default().fg(COLOR_DIM),
        )),
    ])
    .block(
        Block::default()
            .title("Profile")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(card, chunks[0]);

    let (lines, title, empty_text) = match app.profile_tab {
        ProfileTab::MyLines => (
            &app.my_lines,
            format!("My Lines ({})", app.my_lines.len()),
            "You haven't posted any lines yet.",
        ),
        ProfileTab::Bookmarks => (
            &app.bookmarked_lines,
            format!("Bookmarked ({})", app.bookmarked_lines.len()),
            "No bookmarked lines yet.",
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    if app.profile_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(COLOR_DIM))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(loading, chunks[1]);
    } else if lines.is_empty() {
        let empty = Paragraph::new(empty_text)
            .style(Style::default().fg(COLOR_DIM))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[1]);
    } else {
        render_line_list(frame, lines, app.profile_selected, block, chunks[1]);
    }
}
