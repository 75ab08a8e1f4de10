//! The login screen: email/password sign-in and account creation.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::{App, LoginField, LoginMode};

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer, area);

    let dialog = centered_rect(48, 14, area);
    let title = match app.login.mode {
        LoginMode::SignIn => "Sign in to OneLine",
        LoginMode::SignUp => "Create your OneLine account",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let field = |label: &str, value: &str, focused: bool, mask: bool| -> Line<'static> {
        let shown = if mask {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().fg(COLOR_ACCENT)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        Line::from(vec![
            Span::styled(format!("{}{:<10}", marker, label), style),
            Span::styled(shown, Style::default().fg(COLOR_ACCENT)),
            Span::styled(if focused { "_" } else { "" }, Style::default().fg(COLOR_ACCENT)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "OneLine",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        field(
            "Email",
            &app.login.email,
            app.login.focus == LoginField::Email,
            false,
        ),
        field(
            "Password",
            &app.login.password,
            app.login.focus == LoginField::Password,
            true,
        ),
    ];
    if app.login.mode == LoginMode::SignUp {
        lines.push(field(
            "Username",
            &app.login.username,
            app.login.focus == LoginField::Username,
            false,
        ));
    }
    lines.push(Line::raw(""));
    if app.login.in_flight {
        lines.push(Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        let toggle_hint = match app.login.mode {
            LoginMode::SignIn => "[Ctrl+T] Create an account instead",
            LoginMode::SignUp => "[Ctrl+T] Sign in instead",
        };
        lines.push(Line::from(Span::styled(
            "[Tab] Next field  [Enter] Submit  [Esc] Back",
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::from(Span::styled(
            toggle_hint,
            Style::default().fg(COLOR_DIM),
        )));
    }

    let dialog_widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(ratatui::widgets::Wrap { trim: false });
    frame.render_widget(dialog_widget, dialog);
}
