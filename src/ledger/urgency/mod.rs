mod as_str;
mod all;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    Urgent,
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Medium
    }
}
