pub mod store;
mod urgency;
mod transaction;
mod seed;
mod otp;
mod display_summary;

use serde::{Deserialize, Serialize};

pub use otp::{generate_otp, is_well_formed_otp, OTP_LENGTH};
pub use seed::{seed_quests, seed_transactions, SEED_BALANCE};
pub use store::LedgerStore;
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
pub use urgency::Urgency;

/// Whole rupees
pub type Amount = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub title: String,
    pub description: String,
    pub reward: Amount,
    pub xp: u32,
    pub urgency: Urgency,
    pub deadline: String, // free text, e.g. "Today, 2 PM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_my_quest: Option<bool>,
    /// Fixed for the quest's lifetime; the only credential that releases the reward
    pub otp: String,
}

/// A quest as submitted by the poster, before a code is assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestDraft {
    pub title: String,
    pub description: String,
    pub reward: Amount,
    pub xp: u32,
    pub urgency: Urgency,
    pub deadline: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub highlighted: Option<bool>,
    #[serde(default)]
    pub is_my_quest: Option<bool>,
}

impl QuestDraft {
    pub fn into_quest(self, otp: String) -> Quest {
        Quest {
            title: self.title,
            description: self.description,
            reward: self.reward,
            xp: self.xp,
            urgency: self.urgency,
            deadline: self.deadline,
            location: self.location,
            highlighted: self.highlighted,
            is_my_quest: self.is_my_quest,
            otp,
        }
    }
}
