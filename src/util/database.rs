// src/util/database.rs
// SQLite-backed key/value storage, the durable counterpart to browser local storage

use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{JugaadError, Result};

pub const DATABASE_FILE: &str = "campus_jugaad.db";

#[derive(Clone)]
pub struct Database {
    pub(crate) app_conn: Arc<Mutex<Connection>>,
}

// Manual Debug implementation since Mutex<Connection> doesn't implement Debug
impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("app_conn", &"Arc<Mutex<Connection>>")
            .finish()
    }
}

impl Database {
    /// Opens `<data_dir>/campus_jugaad.db`, creating the directory if needed.
    pub fn open_in_dir(data_dir: &Path) -> Result<Self> {
        if !data_dir.exists() {
            std::fs::create_dir_all(data_dir)?;
        }
        Self::open(&data_dir.join(DATABASE_FILE))
    }

    pub fn open(path: &Path) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let db = Database {
            app_conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.app_conn.lock().map_err(|_| JugaadError::StorageLock)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    pub fn read_value(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    pub fn write_value(&self, key: &str, value: &str) -> Result<()> {
        let timestamp = chrono::Utc::now().timestamp();

        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO local_storage (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![key, value, timestamp],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_replaces_value() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.read_value("campus_jugaad_balance").unwrap(), None);

        db.write_value("campus_jugaad_balance", "450").unwrap();
        db.write_value("campus_jugaad_balance", "250").unwrap();
        assert_eq!(
            db.read_value("campus_jugaad_balance").unwrap().as_deref(),
            Some("250")
        );
    }

    #[test]
    fn test_open_in_dir_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("db");

        let db = Database::open_in_dir(&data_dir).unwrap();
        db.write_value("k", "v").unwrap();

        assert!(data_dir.join(DATABASE_FILE).exists());
    }
}
