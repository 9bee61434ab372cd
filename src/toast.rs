//! Toast notifications
//!
//! The marketplace reports outcomes through [`ToastSink`]; the TUI renders the
//! newest live toast from [`Toasts`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_TOASTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub shown_at: Instant,
}

pub trait ToastSink {
    fn show_toast(&mut self, kind: ToastKind, title: &str, message: &str);

    /// Drops toasts past their display time. Returns true if any went.
    fn expire(&mut self, _now: Instant) -> bool {
        false
    }
}

#[derive(Debug)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    display_for: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl Toasts {
    pub fn new(display_for: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            display_for,
        }
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

}

impl ToastSink for Toasts {
    fn show_toast(&mut self, kind: ToastKind, title: &str, message: &str) {
        if self.queue.len() == MAX_TOASTS {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast {
            kind,
            title: title.to_string(),
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }

    fn expire(&mut self, now: Instant) -> bool {
        let before = self.queue.len();
        let display_for = self.display_for;
        self.queue
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < display_for);
        self.queue.len() != before
    }
}
