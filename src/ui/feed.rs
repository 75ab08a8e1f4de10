//! The feed screen: header, line-of-the-day banner, and the line list.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use super::helpers::format_relative_time;
use super::theme::{
    line_theme_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_MARKED,
};
use crate::app::App;
use crate::models::{DisplayLine, LineTheme};

/// The static banner line shown above the feed.
const LINE_OF_THE_DAY: &str =
    "Welcome to OneLine - where every thought matters, no matter how brief.";

pub fn render_feed_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // line of the day
            Constraint::Min(1),    // feed
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_line_of_the_day(frame, chunks[1]);
    render_feed_list(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let viewer = match app.session.as_ref() {
        Some(session) => format!("@{}", session.username()),
        None => "anonymous".to_string(),
    };
    let hints = "[c]ompose [s]earch [p]rofile [g]settings [l]ike [b]ookmark [q]uit";

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "OneLine",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(viewer, Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(hints, Style::default().fg(COLOR_DIM)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}

fn render_line_of_the_day(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "Line of the Day  ",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        ),
        Span::styled(LINE_OF_THE_DAY, Style::default().fg(COLOR_ACCENT)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(line_theme_color(LineTheme::Default))),
    );
    frame.render_widget(banner, area);
}

fn render_feed_list(frame: &mut Frame, app: &App, area: Rect) {
    let mut title = "Feed".to_string();
    if let Some(date) = app.date_filter.as_deref() {
        title = format!("Feed - {}", date);
    }
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    if app.feed_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(COLOR_DIM))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(loading, area);
        return;
    }

    if app.feed.is_empty() {
        let text = if app.date_filter.is_some() {
            "No lines found for this date. Try a different date or check back later!"
        } else {
            "No lines yet. Be the first to share your thoughts!"
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(COLOR_DIM))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    render_line_list(frame, &app.feed, app.feed_selected, block, area);
}

/// Render a list of display records with the shared card layout. Used by
/// both the feed and the profile tabs.
pub fn render_line_list(
    frame: &mut Frame,
    lines: &[DisplayLine],
    selected: usize,
    block: Block,
    area: Rect,
) {
    let items: Vec<ListItem> = lines.iter().map(line_card).collect();

    let mut state = ListState::default();
    if !lines.is_empty() {
        state.select(Some(selected.min(lines.len() - 1)));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(30, 30, 40)))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn line_card(line: &DisplayLine) -> ListItem<'static> {
    let text_style = if line.theme == LineTheme::Default {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default()
            .fg(line_theme_color(line.theme))
            .add_modifier(Modifier::BOLD)
    };

    let like_marker = if line.is_liked { "▲" } else { "△" };
    let bookmark_marker = if line.is_bookmarked { "■" } else { "□" };
    let marker_style = |marked: bool| {
        if marked {
            Style::default().fg(COLOR_MARKED)
        } else {
            Style::default().fg(COLOR_DIM)
        }
    };

    let meta = Line::from(vec![
        Span::styled(format!("@{}", line.author), Style::default().fg(COLOR_DIM)),
        Span::styled(" · ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format_relative_time(line.timestamp),
            Style::default().fg(COLOR_DIM),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", like_marker, line.likes),
            marker_style(line.is_liked),
        ),
        Span::raw(" "),
        Span::styled(bookmark_marker.to_string(), marker_style(line.is_bookmarked)),
    ]);

    ListItem::new(vec![
        Line::from(Span::styled(line.text.clone(), text_style)),
        meta,
        Line::raw(""),
    ])
}
