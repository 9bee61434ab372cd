//! Ledger/escrow store
//!
//! Single owner of the wallet balance, the quest catalog and the transaction
//! history. Every mutation is mirrored to the storage port before the call
//! returns.

mod load;
mod persist;
mod record_transaction;
mod add_quest;
mod accept_quest;
mod complete_active_quest;
mod withdraw;
mod add_money;

#[cfg(test)]
mod tests;

use crate::storage::KeyValueStorage;
use persist::Changed;
use super::{Amount, Quest, Transaction};

#[derive(Debug)]
pub struct LedgerStore<S: KeyValueStorage> {
    storage: S,
    balance: Amount,
    quests: Vec<Quest>,
    transactions: Vec<Transaction>,
    /// Set when a write failed; the next mutation rewrites every key
    out_of_sync: bool,
}

impl<S: KeyValueStorage> LedgerStore<S> {
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Newest first
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True while storage lags behind memory after a failed write
    pub fn is_out_of_sync(&self) -> bool {
        self.out_of_sync
    }
}
