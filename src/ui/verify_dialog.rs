use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    prelude::{Color, Modifier, Style, Widget},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::ledger::OTP_LENGTH;
use super::centered_rect;
use super::style::VERIFY;

pub(super) fn render_verify_dialog(app: &App, area: Rect, buf: &mut Buffer) {
    let flow = app.market.flow();
    let popup = centered_rect(50, 40, area);
    Widget::render(Clear, popup, buf);

    let code: Vec<char> = flow.entered_code().chars().collect();
    let mut slots = Vec::with_capacity(OTP_LENGTH * 2);
    for i in 0..OTP_LENGTH {
        let (text, style) = match code.get(i) {
            Some(ch) => (format!("[{}]", ch), Style::default().fg(VERIFY).add_modifier(Modifier::BOLD)),
            None => ("[ ]".to_string(), Style::default().fg(Color::DarkGray)),
        };
        slots.push(Span::styled(text, style));
        slots.push(Span::raw(" "));
    }

    let mut lines = vec![
        Line::from(""),
        Line::from("Ask the poster for the 4-digit code"),
        Line::from(""),
        Line::from(slots),
        Line::from(""),
    ];
    if flow.has_error(Instant::now()) {
        lines.push(Line::from(Span::styled(
            "Incorrect OTP. Please try again.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(active) = flow.active() {
        lines.push(Line::from(Span::styled(
            format!("₹{} will be added on success", active.reward),
            Style::default().fg(Color::Green),
        )));
    }

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(VERIFY))
                .title(" Verify OTP ")
                .title_alignment(Alignment::Center)
        )
        .alignment(Alignment::Center);
    Widget::render(dialog, popup, buf);
}
