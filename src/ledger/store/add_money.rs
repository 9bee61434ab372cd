use crate::error::Result;
use crate::ledger::{Amount, Transaction, TransactionKind};
use crate::log_info;
use crate::storage::KeyValueStorage;
use super::{Changed, LedgerStore};

impl<S: KeyValueStorage> LedgerStore<S> {
    pub fn add_money(&mut self, amount: Amount) -> Result<Transaction> {
        self.balance = self.balance.saturating_add(amount);
        let transaction = self.record_transaction(
            TransactionKind::Credit,
            "Added to Wallet".to_string(),
            amount,
        );

        log_info!("Deposited {}", amount);

        self.sync(Changed::Wallet)?;
        Ok(transaction)
    }
}
