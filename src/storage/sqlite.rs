//! Implements a SQLite backed key-value storage for the persisted blob.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, storage::Storage};

/// The key the transaction list is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "transactions";

/// Stores the blob as one row of a key-value table in a SQLite database.
///
/// Call [create_storage_table] on the connection before using the storage.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    connection: Arc<Mutex<Connection>>,
    key: String,
}

impl SqliteStorage {
    /// Create a new storage for the SQLite `connection` that reads and writes
    /// the row named `key`.
    pub fn new(connection: Arc<Mutex<Connection>>, key: &str) -> Self {
        Self {
            connection,
            key: key.to_owned(),
        }
    }
}

impl Storage for SqliteStorage {
    fn load(&self) -> Result<Option<String>, Error> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| Error::StorageLockError)?;

        connection
            .query_row(
                "SELECT value FROM storage WHERE key = :key",
                &[(":key", &self.key)],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn save(&mut self, blob: &str) -> Result<(), Error> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| Error::StorageLockError)?;

        connection.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (&self.key, blob),
        )?;

        Ok(())
    }
}

/// Create the key-value table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_storage_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}
