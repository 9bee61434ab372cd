use ratatui::{
    layout::Alignment,
    prelude::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// Stand-in for an empty list: what is missing, then how to fill it
    pub fn placeholder(
        title: &'static str,
        message: &'static str,
        hint: &'static str,
        accent: Color,
    ) -> Paragraph<'static> {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(Color::Gray).italic())),
            Line::from(""),
            Line::from(Span::styled(hint, Style::default().fg(accent))),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .title(title)
                    .padding(Padding::horizontal(1)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
