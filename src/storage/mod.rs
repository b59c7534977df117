//! The persistence port used by the transaction store.
//!
//! A [Storage] holds a single serialized blob: the whole transaction list.
//! Backends only move bytes around, the store decides what goes in the blob.

mod file;
mod memory;
mod sqlite;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::{DEFAULT_STORAGE_KEY, SqliteStorage, create_storage_table};

use crate::Error;

/// Reads and writes the persisted transaction blob.
pub trait Storage: Send {
    /// Get the persisted blob, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    /// Returns an error if the backend could not be read.
    fn load(&self) -> Result<Option<String>, Error>;

    /// Replace the persisted blob with `blob`.
    ///
    /// # Errors
    /// Returns an error if the backend could not be written.
    fn save(&mut self, blob: &str) -> Result<(), Error>;
}
