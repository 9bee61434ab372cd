use crate::error::{JugaadError, Result};
use crate::ledger::{Amount, Transaction, TransactionKind};
use crate::storage::KeyValueStorage;
use crate::{log_info, log_warn};
use super::{Changed, LedgerStore};

impl<S: KeyValueStorage> LedgerStore<S> {
    pub fn withdraw(&mut self, amount: Amount) -> Result<Transaction> {
        if self.balance < amount {
            log_warn!("Rejected withdrawal of {}: balance {}", amount, self.balance);
            return Err(JugaadError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        let transaction = self.record_transaction(
            TransactionKind::Debit,
            "Withdrawal to Bank".to_string(),
            amount,
        );

        log_info!("Withdrew {}", amount);

        self.sync(Changed::Wallet)?;
        Ok(transaction)
    }
}
