//! Driven port for client-side navigation.
//!
//! The gateway uses it for exactly one thing: sending the user back to the
//! application root after the backend rejects the session token.

/// Location the client returns to after a forced logout.
pub const APPLICATION_ROOT: &str = "/";

/// Port for requesting a client-side location change.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Move the client to `location`.
    fn navigate(&self, location: &str);
}
