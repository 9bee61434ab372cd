use thiserror::Error;

use crate::ledger::Amount;

#[derive(Error, Debug)]
pub enum JugaadError {
    #[error("Insufficient balance: quest needs {required}, wallet holds {available}")]
    InsufficientBalance { required: Amount, available: Amount },

    #[error("Insufficient funds: cannot withdraw {requested}, wallet holds {available}")]
    InsufficientFunds { requested: Amount, available: Amount },

    #[error("A quest is already active: {0}")]
    QuestAlreadyActive(String),

    #[error("No active quest")]
    NoActiveQuest,

    #[error("Quest not found at index {0}")]
    QuestNotFound(usize),

    #[error("Corrupt record under '{key}': {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Storage lock poisoned")]
    StorageLock,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl JugaadError {
    /// True for the conditions a user can recover from by topping up the wallet.
    pub fn is_balance_shortfall(&self) -> bool {
        matches!(
            self,
            JugaadError::InsufficientBalance { .. } | JugaadError::InsufficientFunds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, JugaadError>;
