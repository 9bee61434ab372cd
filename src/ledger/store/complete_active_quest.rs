use crate::active_quest::ActiveQuest;
use crate::error::Result;
use crate::ledger::{Transaction, TransactionKind};
use crate::log_info;
use crate::storage::KeyValueStorage;
use super::{Changed, LedgerStore};

impl<S: KeyValueStorage> LedgerStore<S> {
    /// Pays out an accepted quest. Takes the quest by value so it cannot be
    /// paid twice; the code check happens before this is called.
    pub fn complete_active_quest(&mut self, active: ActiveQuest) -> Result<Transaction> {
        self.balance = self.balance.saturating_add(active.reward);
        let transaction = self.record_transaction(
            TransactionKind::Credit,
            format!("Quest Reward: {}", active.title),
            active.reward,
        );

        log_info!("Paid out {} for '{}'", active.reward, active.title);

        self.sync(Changed::Wallet)?;
        Ok(transaction)
    }
}
