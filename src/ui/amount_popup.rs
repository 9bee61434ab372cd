use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    prelude::{Color, Style, Widget},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::AmountPrompt;
use super::centered_rect;

pub(super) fn render_amount_popup(prompt: &AmountPrompt, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(40, 30, area);
    Widget::render(Clear, popup, buf);

    let mut lines = vec![
        Line::from(""),
        Line::from(format!("Amount: ₹{}_", prompt.input)),
        Line::from(""),
    ];
    if let Some(error) = &prompt.error {
        lines.push(Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red))));
    }

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(format!(" {} ", prompt.action.title()))
        )
        .alignment(Alignment::Center);
    Widget::render(dialog, popup, buf);
}
