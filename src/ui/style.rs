use ratatui::style::Color;

use crate::ledger::{TransactionKind, Urgency};

pub const ACCENT: Color = Color::Rgb(45, 127, 249);
pub const VERIFY: Color = Color::Rgb(0, 245, 212);

pub fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Low => Color::Green,
        Urgency::Medium => Color::Yellow,
        Urgency::Urgent => Color::Red,
    }
}

pub fn transaction_color(kind: TransactionKind) -> Color {
    match kind {
        TransactionKind::Credit => Color::Green,
        TransactionKind::Debit => Color::Red,
    }
}
