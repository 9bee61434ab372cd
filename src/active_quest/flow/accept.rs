use crate::active_quest::{ActiveQuest, CountdownTimer};
use crate::error::{JugaadError, Result};
use crate::log_info;
use super::ActiveQuestFlow;

impl ActiveQuestFlow {
    /// Idle -> Timing. A second accept while one quest is held is rejected,
    /// leaving the first quest and its escrow untouched.
    pub fn accept(&mut self, quest: ActiveQuest) -> Result<()> {
        if let Some(current) = &self.active {
            return Err(JugaadError::QuestAlreadyActive(current.title.clone()));
        }

        self.generation += 1;
        if let Some(sender) = &self.tick_sender {
            self.timer = Some(CountdownTimer::start(
                self.generation,
                self.tick_period,
                sender.clone(),
            ));
        }

        log_info!(
            "Accepted '{}' with {}s on the clock",
            quest.title,
            quest.duration
        );

        self.verifying = false;
        self.code.clear();
        self.error_raised_at = None;
        self.active = Some(quest);
        Ok(())
    }
}
