use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::{Color, Modifier, Style, Widget},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use super::style::VERIFY;

pub(super) fn render_active_quest_bar(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(active) = app.market.flow().active() else {
        return;
    };

    let mut spans = vec![
        Span::styled("⏱ ", Style::default().fg(VERIFY)),
        Span::styled(
            active.remaining_display(),
            Style::default().fg(VERIFY).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(active.title.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ];
    if let Some(location) = &active.location {
        spans.push(Span::styled(format!(" @ {}", location), Style::default().fg(Color::Gray)));
    }
    spans.push(Span::styled(
        "   [v] Verify OTP  [x] Dismiss",
        Style::default().fg(Color::Yellow),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(VERIFY))
            .title(format!(" Active Quest · ₹{} ", active.reward))
    );
    Widget::render(bar, area, buf);
}
