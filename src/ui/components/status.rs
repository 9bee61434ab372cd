use ratatui::{
    layout::Alignment,
    prelude::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::toast::{Toast, ToastKind};
use super::UiComponent;

impl UiComponent {
    /// Toast line; an empty bordered box when there is nothing to say
    pub fn status(toast: Option<&Toast>) -> Paragraph<'_> {
        let Some(toast) = toast else {
            return Paragraph::new("").block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Status "),
            );
        };

        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", toast.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(toast.message.as_str(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(" Status ")
            )
            .alignment(Alignment::Center)
    }
}
