use crate::error::{JugaadError, Result};
use crate::ledger::OTP_LENGTH;
use super::ActiveQuestFlow;

impl ActiveQuestFlow {
    /// Timing/Verifying -> Verifying
    pub fn open_verification(&mut self) -> Result<()> {
        if self.active.is_none() {
            return Err(JugaadError::NoActiveQuest);
        }
        self.verifying = true;
        Ok(())
    }

    /// Hides the dialog; whatever was typed stays
    pub fn close_verification(&mut self) {
        self.verifying = false;
    }

    /// Returns true if the character was taken
    pub fn push_code_char(&mut self, ch: char) -> bool {
        if !self.verifying || !ch.is_ascii_digit() || self.code.len() >= OTP_LENGTH {
            return false;
        }
        self.code.push(ch);
        true
    }

    pub fn pop_code_char(&mut self) -> bool {
        self.verifying && self.code.pop().is_some()
    }
}
