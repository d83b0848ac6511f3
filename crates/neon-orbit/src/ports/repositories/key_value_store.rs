//! Key-Value Store Port
//!
//! Abstract interface for the single local store the state lives in.

use crate::domain::errors::DomainError;

/// String-keyed blob storage
///
/// Single writer, last write wins. Implementations live in `adapters/`.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Delete a value. Returns whether something was removed.
    fn remove(&mut self, key: &str) -> Result<bool, DomainError>;
}
