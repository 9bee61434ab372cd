use serde::{Deserialize, Serialize};

use super::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Pending,
    Failed,
}

/// One line of wallet history. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Amount,
    pub status: TransactionStatus,
    pub date: String,
}

impl Transaction {
    pub fn signed_label(&self) -> String {
        match self.kind {
            TransactionKind::Credit => format!("+₹{}", self.amount),
            TransactionKind::Debit => format!("-₹{}", self.amount),
        }
    }
}
