//! Active-quest OTP flow
//!
//! At most one accepted quest at a time, a countdown that runs while it is
//! held, and a verification step that releases the reward only when the
//! entered code matches the quest's OTP.

mod countdown;
mod flow;

use serde::{Deserialize, Serialize};

use crate::ledger::{Amount, Quest};
use crate::util::format::FormatUtils;

pub use countdown::{CountdownTick, CountdownTimer, TickReceiver, TickSender};
pub use flow::{ActiveQuestFlow, FlowState, VerifyOutcome};

/// Default accept window, just under two hours
pub const DEFAULT_ACCEPT_WINDOW_SECS: u64 = 7185;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuest {
    pub title: String,
    pub location: Option<String>,
    /// Seconds remaining, floored at zero
    pub duration: u64,
    pub reward: Amount,
    pub otp: String,
}

impl ActiveQuest {
    pub fn from_quest(quest: &Quest, duration_secs: u64) -> Self {
        Self {
            title: quest.title.clone(),
            location: quest.location.clone(),
            duration: duration_secs,
            reward: quest.reward,
            otp: quest.otp.clone(),
        }
    }

    pub fn remaining_display(&self) -> String {
        FormatUtils::countdown(self.duration)
    }
}
