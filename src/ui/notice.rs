//! Transient notice bar at the bottom of the screen.

use ratatui::{
    prelude::*,
    widgets::{Clear, Paragraph},
};

use super::theme::{COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS};
use crate::app::{Notice, NoticeKind};

pub fn render_notice(frame: &mut Frame, notice: &Notice) {
    let area = frame.area();
    if area.height < 2 {
        return;
    }
    let bar = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let color = match notice.kind {
        NoticeKind::Info => COLOR_INFO,
        NoticeKind::Success => COLOR_SUCCESS,
        NoticeKind::Error => COLOR_ERROR,
    };

    frame.render_widget(Clear, bar);
    let widget = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", notice.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(widget, bar);
}
