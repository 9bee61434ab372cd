use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::{Color, Modifier, Style, Widget},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::marketplace::Tab;
use crate::util::format::FormatUtils;
use super::style::ACCENT;

pub(super) fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(22)])
        .split(area);

    let titles: Vec<Line> = Tab::all().iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.market.active_tab().index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(" Campus Jugaad ")
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD));
    Widget::render(tabs, chunks[0], buf);

    let balance = Paragraph::new(FormatUtils::rupees(app.market.store().balance()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Wallet ")
        )
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    Widget::render(balance, chunks[1], buf);
}
