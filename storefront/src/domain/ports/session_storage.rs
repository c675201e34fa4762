//! Driven port for the persisted client-side key/value store.
//!
//! The store mirrors browser storage: one opaque string per well-known key.
//! Interpretation of the stored record belongs to
//! [`AuthStore`](crate::domain::AuthStore).

use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStorageError {
    /// The backing store could not be read.
    #[error("session storage read failed: {message}")]
    Read {
        /// Adapter diagnostic.
        message: String,
    },
    /// The backing store rejected a write or removal.
    #[error("session storage write failed: {message}")]
    Write {
        /// Adapter diagnostic.
        message: String,
    },
}

impl SessionStorageError {
    /// Helper for read failures.
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read {
            message: message.into(),
        }
    }

    /// Helper for write and removal failures.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Port for persisting small string records across process restarts.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStorage: Send + Sync {
    /// Return the value stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, SessionStorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), SessionStorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), SessionStorageError>;
}
