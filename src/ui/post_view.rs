use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::{Color, Modifier, Style, Widget},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, PostForm, PostStep};
use crate::ledger::Urgency;
use super::style::urgency_color;

pub(super) fn render_post_form(app: &App, area: Rect, buf: &mut Buffer) {
    let form = &app.post_form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step title
            Constraint::Min(1),    // Field
            Constraint::Length(if form.error.is_some() { 3 } else { 0 }),
        ])
        .split(area);

    let title = Paragraph::new(format!("🆕 Post a Quest - {}", form.step.label()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
        )
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    Widget::render(title, chunks[0], buf);

    match form.step {
        PostStep::Urgency => render_urgency_picker(form, chunks[1], buf),
        PostStep::Confirm => render_confirm(app, chunks[1], buf),
        step => {
            let value = match step {
                PostStep::Title => &form.title,
                PostStep::Description => &form.description,
                PostStep::Reward => &form.reward,
                PostStep::Xp => &form.xp,
                PostStep::Deadline => &form.deadline,
                _ => &form.location,
            };
            let content = Paragraph::new(format!("\n{}:\n\n{}_", step.label(), value))
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false });
            Widget::render(content, chunks[1], buf);
        }
    }

    if let Some(error) = &form.error {
        let error = Paragraph::new(error.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        Widget::render(error, chunks[2], buf);
    }
}

fn render_urgency_picker(form: &PostForm, area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = Urgency::all()
        .iter()
        .enumerate()
        .map(|(i, urgency)| {
            let selected = i == form.urgency_index;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(urgency_color(*urgency))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(urgency_color(*urgency))
            };
            let prefix = if selected { "▶ " } else { "  " };
            ListItem::new(format!("{}{}", prefix, urgency.as_str())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Select Urgency ")
    );
    Widget::render(list, area, buf);
}

fn render_confirm(app: &App, area: Rect, buf: &mut Buffer) {
    let form = &app.post_form;
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<13}", label), Style::default().fg(Color::Gray)),
            Span::raw(value),
        ])
    };

    let reward: u64 = form.reward.parse().unwrap_or(0);
    let balance = app.market.store().balance();
    let after = if balance >= reward {
        Span::styled(format!("₹{} left after escrow", balance - reward), Style::default().fg(Color::Green))
    } else {
        Span::styled("Not enough balance - add money first".to_string(), Style::default().fg(Color::Red))
    };

    let lines = vec![
        Line::from(""),
        field("Title", form.title.clone()),
        field("Description", form.description.clone()),
        field("Reward", format!("₹{}", form.reward)),
        field("XP", if form.xp.is_empty() { "0".to_string() } else { form.xp.clone() }),
        field("Urgency", form.urgency().as_str().to_string()),
        field("Deadline", form.deadline.clone()),
        field("Location", form.location.clone()),
        Line::from(""),
        Line::from(after),
        Line::from(""),
        Line::from("Post this quest? ([y]/[n])"),
    ];

    let content = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
        )
        .wrap(Wrap { trim: true });
    Widget::render(content, area, buf);
}
