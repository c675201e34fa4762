//! Navigator adapter for non-browser hosts.
//!
//! There is no page to move, so the adapter logs the request and remembers
//! the most recent location for callers that want to act on it.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::domain::ports::Navigator;

/// Records navigation requests.
#[derive(Debug, Default)]
pub struct LoggingNavigator {
    last: Mutex<Option<String>>,
}

impl LoggingNavigator {
    /// Most recent location requested, if any.
    pub fn last_location(&self) -> Option<String> {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for LoggingNavigator {
    fn navigate(&self, location: &str) {
        info!(%location, "navigation requested");
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(location.to_owned());
    }
}
