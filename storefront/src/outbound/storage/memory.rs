//! In-memory session storage adapter.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{SessionStorage, SessionStorageError};

/// Process-local key/value store.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemorySessionStorage {
    /// Store pre-populated with `key` set to `value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        storage
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionStorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionStorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
