use crate::active_quest::ActiveQuest;
use crate::error::{JugaadError, Result};
use crate::log_info;
use crate::storage::KeyValueStorage;
use super::LedgerStore;

impl<S: KeyValueStorage> LedgerStore<S> {
    /// Projects the quest at `index` into an [`ActiveQuest`]. No balance effect.
    pub fn accept_quest(&self, index: usize, duration_secs: u64) -> Result<ActiveQuest> {
        let quest = self
            .quests
            .get(index)
            .ok_or(JugaadError::QuestNotFound(index))?;

        log_info!("Accepted {}", quest.display_summary());

        Ok(ActiveQuest::from_quest(quest, duration_secs))
    }
}
