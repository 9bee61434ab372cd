pub mod components;
pub mod style;
mod header;
mod post_view;
mod quest_board;
mod wallet_view;
mod active_quest_bar;
mod verify_dialog;
mod amount_popup;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::active_quest::FlowState;
use crate::app::App;
use crate::marketplace::Tab;
use components::UiComponent;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let has_active = self.market.flow().active().is_some();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                              // Tabs + balance
                Constraint::Min(1),                                 // Body
                Constraint::Length(if has_active { 3 } else { 0 }), // Active quest bar
                Constraint::Length(3),                              // Status
                Constraint::Length(3),                              // Help
            ])
            .split(area);

        header::render_header(self, chunks[0], buf);

        match self.market.active_tab() {
            Tab::Post => post_view::render_post_form(self, chunks[1], buf),
            Tab::Find => quest_board::render_quest_board(self, chunks[1], buf),
            Tab::Wallet => wallet_view::render_wallet(self, chunks[1], buf),
        }

        if has_active {
            active_quest_bar::render_active_quest_bar(self, chunks[2], buf);
        }

        Widget::render(UiComponent::status(self.market.notifier().latest()), chunks[3], buf);
        Widget::render(UiComponent::help(help_text(self)), chunks[4], buf);

        if self.market.flow().state() == FlowState::Verifying {
            verify_dialog::render_verify_dialog(self, area, buf);
        } else if let Some(prompt) = &self.amount_prompt {
            amount_popup::render_amount_popup(prompt, area, buf);
        }
    }
}

type KeyHints = &'static [(&'static str, &'static str)];

fn help_text(app: &App) -> KeyHints {
    if app.market.flow().state() == FlowState::Verifying {
        return &[("0-9", "Code"), ("Enter", "Verify"), ("Esc", "Close")];
    }
    if app.amount_prompt.is_some() {
        return &[("0-9", "Amount"), ("Enter", "Confirm"), ("Esc", "Cancel")];
    }
    match app.market.active_tab() {
        Tab::Post => &[("Tab", "Switch"), ("Enter", "Next"), ("Esc", "Back"), ("Ctrl+C", "Quit")],
        Tab::Find => &[
            ("Tab", "Switch"),
            ("↑↓", "Select"),
            ("Enter", "Accept"),
            ("v", "Verify"),
            ("x", "Dismiss"),
            ("q", "Quit"),
        ],
        Tab::Wallet => &[
            ("Tab", "Switch"),
            ("w", "Withdraw"),
            ("a", "Add Money"),
            ("↑↓", "Scroll"),
            ("q", "Quit"),
        ],
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
