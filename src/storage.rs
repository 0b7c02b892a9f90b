use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write saved progress: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode saved progress: {0}")]
    Encode(#[from] serde_yaml::Error),
}

/// Key-value blob storage. The store serializes itself into a single slot;
/// anything that can hold a string under a key can back it.
pub trait Storage {
    /// Returns the blob under `key`, or `None` if nothing was ever saved.
    /// Unreadable data is also `None`: loading must not fail the caller.
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One file per key under a base directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.yaml"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage for tests; can be told to reject writes.
#[derive(Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    pub fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "writes disabled",
            )));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = FileStorage::new(dir.path());
        storage.save("progress", "streak: 3").expect("save ok");
        assert_eq!(storage.load("progress").as_deref(), Some("streak: 3"));
    }

    #[test]
    fn file_storage_missing_key_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path());
        assert!(storage.load("progress").is_none());
    }

    #[test]
    fn memory_storage_can_reject_writes() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes = true;
        assert!(storage.save("progress", "x").is_err());
        assert!(storage.load("progress").is_none());
    }
}
