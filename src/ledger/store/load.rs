use serde::de::DeserializeOwned;

use crate::error::{JugaadError, Result};
use crate::ledger::{seed_quests, seed_transactions, Amount, SEED_BALANCE};
use crate::log_info;
use crate::storage::{KeyValueStorage, BALANCE_KEY, QUESTS_KEY, TRANSACTIONS_KEY};
use super::LedgerStore;

impl<S: KeyValueStorage> LedgerStore<S> {
    /// Rehydrates each collection from storage, seeding whatever is missing,
    /// then writes all three back.
    pub fn load(storage: S) -> Result<Self> {
        let quests = match storage.get_item(QUESTS_KEY)? {
            Some(raw) => parse_json(QUESTS_KEY, &raw)?,
            None => {
                log_info!("No saved quests, using seed catalog");
                seed_quests()
            }
        };

        let balance = match storage.get_item(BALANCE_KEY)? {
            Some(raw) => parse_balance(&raw)?,
            None => SEED_BALANCE,
        };

        let transactions = match storage.get_item(TRANSACTIONS_KEY)? {
            Some(raw) => parse_json(TRANSACTIONS_KEY, &raw)?,
            None => seed_transactions(),
        };

        let store = Self {
            storage,
            balance,
            quests,
            transactions,
            out_of_sync: false,
        };
        store.persist_all()?;

        log_info!(
            "Ledger loaded: balance {}, {} quests, {} transactions",
            store.balance,
            store.quests.len(),
            store.transactions.len()
        );

        Ok(store)
    }
}

fn parse_json<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| JugaadError::CorruptRecord {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Whole rupees. The web app stored `String(number)`, so `"450.0"` is
/// accepted; a fractional balance is not.
fn parse_balance(raw: &str) -> Result<Amount> {
    let raw = raw.trim();
    if let Ok(amount) = raw.parse::<Amount>() {
        return Ok(amount);
    }

    let corrupt = |reason: String| JugaadError::CorruptRecord {
        key: BALANCE_KEY.to_string(),
        reason,
    };
    let value = raw
        .parse::<f64>()
        .map_err(|e| corrupt(format!("'{}' is not a number: {}", raw, e)))?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > Amount::MAX as f64 {
        return Err(corrupt(format!("'{}' is not a whole amount", raw)));
    }
    Ok(value as Amount)
}
