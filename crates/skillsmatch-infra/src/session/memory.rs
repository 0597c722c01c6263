//! In-memory session storage - used in tests and for throwaway sessions.

use std::collections::HashMap;

use parking_lot::RwLock;

use skillsmatch_core::StorageError;
use skillsmatch_core::ports::SessionStorage;

/// In-memory storage using a simple HashMap behind a RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemorySessionStorage {
    store: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.store.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.write().remove(key);
        Ok(())
    }
}
