use crate::active_quest::ActiveQuest;
use crate::log_info;
use super::ActiveQuestFlow;

impl ActiveQuestFlow {
    /// Drops the accepted quest with no payout. The poster's escrow is not
    /// refunded.
    pub fn dismiss(&mut self) -> Option<ActiveQuest> {
        let dismissed = self.finish();
        if let Some(quest) = &dismissed {
            log_info!("Dismissed '{}'", quest.title);
        }
        dismissed
    }
}
