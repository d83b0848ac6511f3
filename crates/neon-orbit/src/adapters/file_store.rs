//! File-backed Key-Value Store
//!
//! Stores each key as `<dir>/<key>.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;
use crate::ports::KeyValueStore;

/// One file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path backing a key
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!(
                "Failed to read {:?}: {}",
                path, e
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            DomainError::Storage(format!("Failed to create {:?}: {}", self.dir, e))
        })?;

        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| DomainError::Storage(format!("Failed to write {:?}: {}", path, e)))
    }

    fn remove(&mut self, key: &str) -> Result<bool, DomainError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::Storage(format!(
                "Failed to remove {:?}: {}",
                path, e
            ))),
        }
    }
}
