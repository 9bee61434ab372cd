use chrono::Local;
use uuid::Uuid;

use crate::ledger::{Amount, Transaction, TransactionKind, TransactionStatus};
use crate::storage::KeyValueStorage;
use crate::util::format::FormatUtils;
use super::LedgerStore;

impl<S: KeyValueStorage> LedgerStore<S> {
    /// Prepends a successful transaction. Persisting is left to the caller so
    /// the balance and history are written together.
    pub(super) fn record_transaction(
        &mut self,
        kind: TransactionKind,
        description: String,
        amount: Amount,
    ) -> Transaction {
        let transaction = Transaction {
            id: self.next_transaction_id(),
            kind,
            description,
            amount,
            status: TransactionStatus::Success,
            date: FormatUtils::transaction_date(&Local::now()),
        };

        self.transactions.insert(0, transaction.clone());
        transaction
    }

    fn next_transaction_id(&self) -> String {
        loop {
            let raw = Uuid::new_v4().simple().to_string();
            let id = format!("TXN-{}", raw[..8].to_uppercase());
            if !self.transactions.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }
}
