//! Storage port for the ledger.
//!
//! The ledger only ever sees string keys and string values, the same shape as
//! browser local storage, so a dump from the web app can be loaded unchanged.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;

use crate::error::Result;

pub const QUESTS_KEY: &str = "campus_jugaad_quests";
pub const BALANCE_KEY: &str = "campus_jugaad_balance";
pub const TRANSACTIONS_KEY: &str = "campus_jugaad_transactions";

/// Durable string key/value storage
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}
