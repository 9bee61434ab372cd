use crate::error::{JugaadError, Result};
use crate::ledger::{generate_otp, Quest, QuestDraft, TransactionKind};
use crate::storage::KeyValueStorage;
use crate::{log_info, log_warn};
use super::{Changed, LedgerStore};

impl<S: KeyValueStorage> LedgerStore<S> {
    /// Posts a quest, holding its reward in escrow straight away.
    pub fn add_quest(&mut self, draft: QuestDraft) -> Result<Quest> {
        if self.balance < draft.reward {
            log_warn!(
                "Rejected quest '{}': reward {} exceeds balance {}",
                draft.title,
                draft.reward,
                self.balance
            );
            return Err(JugaadError::InsufficientBalance {
                required: draft.reward,
                available: self.balance,
            });
        }

        let quest = draft.into_quest(generate_otp());

        self.balance -= quest.reward;
        self.record_transaction(
            TransactionKind::Debit,
            format!("Escrow Hold: {}", quest.title),
            quest.reward,
        );
        self.quests.insert(0, quest.clone());

        log_info!("Escrow hold of {} for '{}'", quest.reward, quest.title);

        self.sync(Changed::Everything)?;
        Ok(quest)
    }
}
