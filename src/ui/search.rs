//! The search-by-date modal.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::app::App;
use crate::feed::DayWindow;

pub fn render_search_modal(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Search by Date")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let preview = if app.search.input.is_empty() {
        "What was the world thinking on...".to_string()
    } else if DayWindow::parse(&app.search.input).is_empty() {
        format!("\"{}\" is not a date yet", app.search.input)
    } else {
        format!("What was the world thinking on {}?", app.search.input)
    };

    let lines = vec![
        Line::from(Span::styled(preview, Style::default().fg(COLOR_DIM))),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Date (YYYY-MM-DD): ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("{}_", app.search.input),
                Style::default().fg(COLOR_ACCENT),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "[Enter] Search  [Esc] Close",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let widget = Paragraph::new(lines).block(block);
    frame.render_widget(widget, area);
}
