use crate::active_quest::CountdownTick;
use super::ActiveQuestFlow;

impl ActiveQuestFlow {
    /// One second off the clock. Ticks from an earlier quest are ignored.
    /// At zero the timer task is dropped and the quest stays verifiable.
    /// Returns true if the display changed.
    pub fn tick(&mut self, tick: CountdownTick) -> bool {
        if tick.generation != self.generation {
            return false;
        }

        match self.active.as_mut() {
            Some(quest) if quest.duration > 0 => {
                quest.duration -= 1;
                if quest.duration == 0 {
                    self.timer = None;
                }
                true
            }
            Some(_) => {
                self.timer = None;
                false
            }
            None => false,
        }
    }
}
