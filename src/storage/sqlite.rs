use crate::error::Result;
use crate::util::database::Database;
use super::KeyValueStorage;

impl KeyValueStorage for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.read_value(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.write_value(key, value)
    }
}
