//! The settings screen: premium upgrade and sign-out.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_PREMIUM};
use crate::app::App;

pub fn render_settings_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // premium card
            Constraint::Length(5), // account card
            Constraint::Min(0),
        ])
        .split(area);

    let premium_lines: Vec<Line> = if app.is_premium() {
        vec![
            Line::from(Span::styled(
                "You're a Premium member!",
                Style::default().fg(COLOR_PREMIUM).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Enjoy unlimited custom themes and exclusive features.",
                Style::default().fg(COLOR_DIM),
            )),
        ]
    } else {
        vec![
            Line::from(Span::styled(
                "Upgrade to Premium - $5/month",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("- Unlock all custom themes", Style::default().fg(COLOR_DIM))),
            Line::from(Span::styled("- Priority support", Style::default().fg(COLOR_DIM))),
            Line::from(Span::styled("- Exclusive features", Style::default().fg(COLOR_DIM))),
            Line::raw(""),
            Line::from(Span::styled("[u] Upgrade now", Style::default().fg(COLOR_ACCENT))),
        ]
    };

    let premium = Paragraph::new(premium_lines).block(
        Block::default()
            .title("♛ Premium Subscription")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_PREMIUM)),
    );
    frame.render_widget(premium, chunks[0]);

    let viewer = app
        .session
        .as_ref()
        .map(|s| format!("@{}", s.username()))
        .unwrap_or_else(|| "anonymous".to_string());
    let account = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Signed in as {}", viewer),
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(Span::styled(
            "[o] Sign out  [Esc] Back to feed",
            Style::default().fg(COLOR_DIM),
        )),
    ])
    .block(
        Block::default()
            .title("Account")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(account, chunks[1]);
}
