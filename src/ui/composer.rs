//! The composer modal: text step, theme step, and the posting state.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::helpers::centered_rect;
use super::theme::{line_theme_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::app::App;
use crate::composer::{Composer, ComposerStep, CHARACTER_LIMIT};
use crate::models::LineTheme;

pub fn render_composer_modal(frame: &mut Frame, app: &App, composer: &Composer) {
    let area = centered_rect(56, 12, frame.area());
    frame.render_widget(Clear, area);

    let title = match composer.step() {
        ComposerStep::EditingText => "Compose Line",
        ComposerStep::ChoosingTheme => "Choose Theme",
        ComposerStep::Submitting => "Posting...",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines = match composer.step() {
        ComposerStep::EditingText => {
            let remaining = composer.remaining_chars();
            let counter_style = if remaining < 20 {
                Style::default().fg(super::theme::COLOR_ERROR)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            vec![
                Line::from(Span::styled(
                    "What's on your mind?",
                    Style::default().fg(COLOR_DIM),
                )),
                Line::raw(""),
                Line::from(Span::styled(
                    format!("{}_", composer.text()),
                    Style::default().fg(COLOR_ACCENT),
                )),
                Line::raw(""),
                Line::from(Span::styled(
                    format!("{}/{} characters remaining", remaining, CHARACTER_LIMIT),
                    counter_style,
                )),
                Line::from(Span::styled(
                    "[Enter] Next  [Esc] Close",
                    Style::default().fg(COLOR_DIM),
                )),
            ]
        }
        ComposerStep::ChoosingTheme => {
            let mut theme_spans: Vec<Span> = Vec::new();
            for (index, theme) in LineTheme::ALL.iter().enumerate() {
                let mut style = Style::default().fg(line_theme_color(*theme));
                if *theme == composer.theme() {
                    style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                let locked = theme.is_premium_only() && !app.is_premium();
                let label = if locked {
                    format!(" {} ♛ ", theme.name())
                } else {
                    format!(" {} ", theme.name())
                };
                if index == app.theme_cursor {
                    theme_spans.push(Span::styled(
                        format!("[{}]", label.trim_end()),
                        style.add_modifier(Modifier::REVERSED),
                    ));
                } else {
                    theme_spans.push(Span::styled(label, style));
                }
            }
            vec![
                Line::from(Span::styled(
                    format!("\"{}\"", composer.text().trim()),
                    Style::default().fg(COLOR_ACCENT),
                )),
                Line::raw(""),
                Line::from(theme_spans),
                Line::raw(""),
                Line::from(Span::styled(
                    format!("Selected: {}", composer.theme()),
                    Style::default().fg(COLOR_DIM),
                )),
                Line::from(Span::styled(
                    "[←/→] Browse  [Space] Select  [Enter] Post  [Backspace] Back  [Esc] Close",
                    Style::default().fg(COLOR_DIM),
                )),
            ]
        }
        ComposerStep::Submitting => vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Posting your line...",
                Style::default().fg(COLOR_DIM),
            )),
        ],
    };

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: false });
    frame.render_widget(widget, area);
}
