//! Session storage port.

use crate::error::StorageError;

/// Persistent string key/value storage - abstraction over where session data lives.
///
/// Access is synchronous and last-write-wins. Implementations only need to be
/// consistent for a single writer.
pub trait SessionStorage: Send + Sync {
    /// Read a value, `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
