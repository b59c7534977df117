//! Stores the persisted blob as a single file on disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Error, storage::Storage};

/// Stores the blob in the file at `path`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage backed by the file at `path`.
    ///
    /// The file does not need to exist yet, it is created on the first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<String>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(Error::FileError(format!(
                "could not read {}: {error}",
                self.path.display()
            ))),
        }
    }

    fn save(&mut self, blob: &str) -> Result<(), Error> {
        // Write then rename so a crash mid-write never leaves a truncated file.
        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, blob).map_err(|error| {
            Error::FileError(format!("could not write {}: {error}", temp_path.display()))
        })?;

        fs::rename(&temp_path, &self.path).map_err(|error| {
            Error::FileError(format!(
                "could not move {} to {}: {error}",
                temp_path.display(),
                self.path.display()
            ))
        })
    }
}
