use crate::error::Result;
use crate::{log_debug, log_warn};
use crate::storage::{KeyValueStorage, BALANCE_KEY, QUESTS_KEY, TRANSACTIONS_KEY};
use super::LedgerStore;

/// Which collections a mutation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Changed {
    Wallet,
    Everything,
}

impl<S: KeyValueStorage> LedgerStore<S> {
    /// Writes what `changed` touched, or all three keys if an earlier write
    /// failed. Memory stays as mutated whatever happens here.
    pub(super) fn sync(&mut self, changed: Changed) -> Result<()> {
        let result = if self.out_of_sync || changed == Changed::Everything {
            self.persist_all()
        } else {
            self.persist_balance().and_then(|()| self.persist_transactions())
        };

        match &result {
            Ok(()) if self.out_of_sync => {
                log_debug!("Storage caught up with the ledger");
                self.out_of_sync = false;
            }
            Ok(()) => {}
            Err(e) => {
                log_warn!("Ledger write failed, will rewrite all keys next time: {}", e);
                self.out_of_sync = true;
            }
        }
        result
    }

    fn persist_quests(&self) -> Result<()> {
        let json = serde_json::to_string(&self.quests)?;
        self.storage.set_item(QUESTS_KEY, &json)?;
        log_debug!("Persisted {} quests", self.quests.len());
        Ok(())
    }

    fn persist_balance(&self) -> Result<()> {
        self.storage.set_item(BALANCE_KEY, &self.balance.to_string())
    }

    fn persist_transactions(&self) -> Result<()> {
        let json = serde_json::to_string(&self.transactions)?;
        self.storage.set_item(TRANSACTIONS_KEY, &json)
    }

    pub(super) fn persist_all(&self) -> Result<()> {
        self.persist_quests()?;
        self.persist_balance()?;
        self.persist_transactions()
    }
}
