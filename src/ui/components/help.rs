use ratatui::{
    layout::Alignment,
    prelude::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::UiComponent;

impl UiComponent {
    /// Key hints as `[key] action` pairs
    pub fn help(bindings: &[(&'static str, &'static str)]) -> Paragraph<'static> {
        let mut spans = Vec::with_capacity(bindings.len() * 2);
        for (i, (key, action)) in bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("[{}] ", key),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(*action, Style::default().fg(Color::Gray)));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
            )
            .alignment(Alignment::Center)
    }
}
