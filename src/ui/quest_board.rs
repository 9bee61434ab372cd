use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Color, Modifier, Style, Widget},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::App;
use crate::ledger::Quest;
use super::components::UiComponent;
use super::style::{urgency_color, ACCENT};

pub(super) fn render_quest_board(app: &App, area: Rect, buf: &mut Buffer) {
    let quests = app.market.store().quests();

    if quests.is_empty() {
        Widget::render(
            UiComponent::placeholder(
                " Find Quests ",
                "No quests on the board yet.",
                "Post one from the Post tab",
                ACCENT,
            ),
            area,
            buf,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let items: Vec<ListItem> = quests
        .iter()
        .enumerate()
        .map(|(i, quest)| {
            let selected = i == app.selected_quest;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else if quest.highlighted.unwrap_or(false) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if selected { "▶ " } else { "  " };

            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(
                    format!("[{}] ", quest.urgency.as_str()),
                    if selected { style } else { Style::default().fg(urgency_color(quest.urgency)) },
                ),
                Span::styled(format!("{} - ₹{}", quest.title, quest.reward), style),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(format!(" Find Quests ({}) ", quests.len()))
    );
    Widget::render(list, chunks[0], buf);

    if let Some(quest) = quests.get(app.selected_quest) {
        render_quest_detail(quest, chunks[1], buf);
    }
}

fn render_quest_detail(quest: &Quest, area: Rect, buf: &mut Buffer) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Gray));

    let mut lines = vec![
        Line::from(Span::styled(
            quest.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(quest.description.clone()),
        Line::from(""),
        Line::from(vec![label("Reward:   "), Span::styled(format!("₹{}", quest.reward), Style::default().fg(Color::Green))]),
        Line::from(vec![label("XP:       "), Span::raw(quest.xp.to_string())]),
        Line::from(vec![
            label("Urgency:  "),
            Span::styled(quest.urgency.as_str(), Style::default().fg(urgency_color(quest.urgency))),
        ]),
        Line::from(vec![label("Deadline: "), Span::raw(quest.deadline.clone())]),
    ];

    if let Some(location) = &quest.location {
        lines.push(Line::from(vec![label("Location: "), Span::raw(location.clone())]));
    }

    // Only the poster gets to see the code they hand over on completion
    if quest.is_my_quest.unwrap_or(false) {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            label("Your OTP: "),
            Span::styled(
                quest.otp.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Accept this quest",
        Style::default().fg(Color::Yellow),
    )));

    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quest Details ")
        )
        .wrap(Wrap { trim: true });
    Widget::render(detail, area, buf);
}
