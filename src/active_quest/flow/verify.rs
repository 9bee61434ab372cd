use std::time::Instant;

use crate::ledger::OTP_LENGTH;
use crate::{log_info, log_warn};
use super::{ActiveQuestFlow, VerifyOutcome};

impl ActiveQuestFlow {
    /// Compares the entered code with the quest's OTP, exactly as typed.
    ///
    /// On a match the flow returns to Idle and hands the quest back so the
    /// caller can pay it out. On a mismatch the error flag goes up and the
    /// dialog stays open for another try.
    pub fn verify(&mut self, now: Instant) -> VerifyOutcome {
        if !self.verifying {
            return VerifyOutcome::NotVerifying;
        }
        if self.code.len() != OTP_LENGTH {
            return VerifyOutcome::Incomplete;
        }

        let matches = self
            .active
            .as_ref()
            .map(|quest| quest.otp == self.code)
            .unwrap_or(false);

        if !matches {
            log_warn!("Incorrect OTP entered");
            self.error_raised_at = Some(now);
            return VerifyOutcome::Mismatch;
        }

        match self.finish() {
            Some(quest) => {
                log_info!("OTP verified for '{}'", quest.title);
                VerifyOutcome::Verified(quest)
            }
            None => VerifyOutcome::NotVerifying,
        }
    }
}
