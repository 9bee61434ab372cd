use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::{Color, Modifier, Style, Widget},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;
use crate::util::format::FormatUtils;
use super::components::UiComponent;
use super::style::transaction_color;

pub(super) fn render_wallet(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let balance = Paragraph::new(vec![
        Line::from(Span::styled("Available Balance", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            FormatUtils::rupees(app.market.store().balance()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("[w] Withdraw  [a] Add Money", Style::default().fg(Color::Yellow))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Wallet ")
    )
    .alignment(Alignment::Center);
    Widget::render(balance, chunks[0], buf);

    let transactions = app.market.store().transactions();
    if transactions.is_empty() {
        Widget::render(
            UiComponent::placeholder(" History ", "No transactions yet.", "[a] Add Money", Color::Green),
            chunks[1],
            buf,
        );
        return;
    }

    let items: Vec<ListItem> = transactions
        .iter()
        .skip(app.history_offset)
        .map(|txn| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>8} ", txn.signed_label()),
                    Style::default().fg(transaction_color(txn.kind)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{} ", txn.description), Style::default().fg(Color::White)),
                Span::styled(format!("{} · {}", txn.date, txn.id), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" History ({}) ", transactions.len()))
    );
    Widget::render(history, chunks[1], buf);
}
