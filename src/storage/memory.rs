//! Keeps the persisted blob in memory.

use std::sync::{Arc, Mutex};

use crate::{Error, storage::Storage};

/// Stores the blob in memory.
///
/// Clones share the same slot, which lets a test hold on to a handle and
/// inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Create an empty storage slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage slot that already holds `blob`.
    pub fn with_blob(blob: &str) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.to_owned()))),
        }
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, Error> {
        let blob = self.blob.lock().map_err(|_| Error::StorageLockError)?;

        Ok(blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<(), Error> {
        let mut slot = self.blob.lock().map_err(|_| Error::StorageLockError)?;
        *slot = Some(blob.to_owned());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::{MemoryStorage, Storage};

    #[test]
    fn new_storage_is_empty() {
        assert_eq!(MemoryStorage::new().load(), Ok(None));
    }

    #[test]
    fn clones_share_the_blob() {
        let handle = MemoryStorage::new();
        let mut storage = handle.clone();

        storage.save("[]").unwrap();

        assert_eq!(handle.load(), Ok(Some("[]".to_owned())));
    }
}
