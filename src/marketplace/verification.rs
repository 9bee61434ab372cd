use std::time::Instant;

use crate::active_quest::VerifyOutcome;
use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::toast::{ToastKind, ToastSink};
use super::Marketplace;

impl<S: KeyValueStorage, N: ToastSink> Marketplace<S, N> {
    pub fn open_verification(&mut self) -> Result<()> {
        self.flow.open_verification()
    }

    pub fn close_verification(&mut self) {
        self.flow.close_verification();
    }

    pub fn push_code_char(&mut self, ch: char) -> bool {
        self.flow.push_code_char(ch)
    }

    pub fn pop_code_char(&mut self) -> bool {
        self.flow.pop_code_char()
    }

    /// Checks the entered code and, on a match, releases the reward.
    /// A mismatch is shown inline by the flow's error flag, not as a toast.
    pub fn verify(&mut self, now: Instant) -> Result<VerifyOutcome> {
        let outcome = self.flow.verify(now);

        if let VerifyOutcome::Verified(quest) = &outcome {
            let reward = quest.reward;
            if let Err(e) = self.store.complete_active_quest(quest.clone()) {
                self.report_failure(&e);
                return Err(e);
            }
            self.notifier.show_toast(
                ToastKind::Success,
                "Quest Completed!",
                &format!("OTP Verified! ₹{} added to wallet.", reward),
            );
        }

        Ok(outcome)
    }
}
