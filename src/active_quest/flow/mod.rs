mod accept;
mod tick;
mod verification;
mod verify;
mod dismiss;


use std::time::{Duration, Instant};

use super::{ActiveQuest, CountdownTimer, TickSender};

pub const DEFAULT_ERROR_DISPLAY: Duration = Duration::from_secs(2);
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,      // Nothing accepted
    Timing,    // Accepted, countdown running
    Verifying, // Code dialog open, countdown still running
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Code matched; the quest is handed back for payout
    Verified(ActiveQuest),
    Mismatch,
    /// Fewer than four characters entered
    Incomplete,
    NotVerifying,
}

#[derive(Debug)]
pub struct ActiveQuestFlow {
    active: Option<ActiveQuest>,
    verifying: bool,
    code: String,
    error_raised_at: Option<Instant>,
    error_display: Duration,

    // Countdown task bookkeeping
    generation: u64,
    timer: Option<CountdownTimer>,
    tick_period: Duration,
    tick_sender: Option<TickSender>,
}

impl Default for ActiveQuestFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveQuestFlow {
    /// A flow with no background timer; drive the countdown with [`ActiveQuestFlow::tick`].
    pub fn new() -> Self {
        Self {
            active: None,
            verifying: false,
            code: String::new(),
            error_raised_at: None,
            error_display: DEFAULT_ERROR_DISPLAY,
            generation: 0,
            timer: None,
            tick_period: DEFAULT_TICK_PERIOD,
            tick_sender: None,
        }
    }

    /// A flow that spawns a countdown task on every accept. Needs a tokio runtime.
    pub fn with_timer(tick_sender: TickSender, tick_period: Duration) -> Self {
        Self {
            tick_sender: Some(tick_sender),
            tick_period,
            ..Self::new()
        }
    }

    pub fn with_error_display(mut self, error_display: Duration) -> Self {
        self.error_display = error_display;
        self
    }

    pub fn state(&self) -> FlowState {
        match (&self.active, self.verifying) {
            (None, _) => FlowState::Idle,
            (Some(_), false) => FlowState::Timing,
            (Some(_), true) => FlowState::Verifying,
        }
    }

    pub fn active(&self) -> Option<&ActiveQuest> {
        self.active.as_ref()
    }

    pub fn entered_code(&self) -> &str {
        &self.code
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_live_timer(&self) -> bool {
        self.timer.as_ref().map(|t| t.is_running()).unwrap_or(false)
    }

    pub fn has_error(&self, now: Instant) -> bool {
        self.error_raised_at
            .map(|raised| now.saturating_duration_since(raised) < self.error_display)
            .unwrap_or(false)
    }

    /// Drops the mismatch flag once its display window has passed.
    /// Returns true if the flag was cleared.
    pub fn clear_expired_error(&mut self, now: Instant) -> bool {
        if self.error_raised_at.is_some() && !self.has_error(now) {
            self.error_raised_at = None;
            return true;
        }
        false
    }

    /// Back to Idle, cancelling the timer
    fn finish(&mut self) -> Option<ActiveQuest> {
        self.timer = None;
        self.verifying = false;
        self.code.clear();
        self.error_raised_at = None;
        self.active.take()
    }
}
