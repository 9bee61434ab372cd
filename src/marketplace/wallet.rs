use crate::error::Result;
use crate::ledger::{Amount, Transaction};
use crate::storage::KeyValueStorage;
use crate::toast::{ToastKind, ToastSink};
use super::Marketplace;

impl<S: KeyValueStorage, N: ToastSink> Marketplace<S, N> {
    pub fn withdraw(&mut self, amount: Amount) -> Result<Transaction> {
        match self.store.withdraw(amount) {
            Ok(transaction) => {
                self.notifier.show_toast(
                    ToastKind::Success,
                    "Withdrawal Successful",
                    &format!("₹{} transferred to your bank account.", amount),
                );
                Ok(transaction)
            }
            Err(e) if e.is_balance_shortfall() => {
                self.notifier.show_toast(
                    ToastKind::Error,
                    "Insufficient Funds",
                    "You don't have enough balance to withdraw that amount.",
                );
                Err(e)
            }
            Err(e) => {
                self.report_failure(&e);
                Err(e)
            }
        }
    }

    pub fn add_money(&mut self, amount: Amount) -> Result<Transaction> {
        match self.store.add_money(amount) {
            Ok(transaction) => {
                self.notifier.show_toast(
                    ToastKind::Success,
                    "Money Added",
                    &format!("₹{} added to your wallet successfully.", amount),
                );
                Ok(transaction)
            }
            Err(e) => {
                self.report_failure(&e);
                Err(e)
            }
        }
    }
}
