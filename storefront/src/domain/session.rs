//! Authenticated session state and its persisted record.
//!
//! [`AuthStore`] is the single owner of the client session. It hydrates from
//! [`SessionStorage`] on open, and is mutated only by `login`, `logout` and
//! the gateway's forced logout on `401`. The gateway re-reads the persisted
//! record before every request, so a session written by another process is
//! honoured on the next call.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::member::{MemberId, MemberLoginResponse};
use super::ports::{SessionStorage, SessionStorageError};

/// Well-known storage key holding the serialized session record.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

const TOKEN_POINTER: &str = "/state/user/token";

/// Authenticated identity and bearer token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Member identifier.
    pub id: MemberId,
    /// Member email.
    pub email: String,
    /// Bearer token attached to outbound requests.
    pub token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl From<MemberLoginResponse> for Session {
    fn from(value: MemberLoginResponse) -> Self {
        Self {
            id: value.id,
            email: value.email,
            token: value.token,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedAuth {
    state: PersistedAuthState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedAuthState {
    #[serde(default)]
    user: Option<Session>,
    #[serde(default)]
    is_authenticated: bool,
}

impl PersistedAuth {
    fn from_session(session: Session) -> Self {
        Self {
            state: PersistedAuthState {
                user: Some(session),
                is_authenticated: true,
            },
            version: 0,
        }
    }
}

/// Session owner shared by the gateway and account flows.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use storefront::domain::{AuthStore, Session};
/// use storefront::outbound::storage::InMemorySessionStorage;
///
/// let store = AuthStore::open(Arc::new(InMemorySessionStorage::default()));
/// assert!(!store.is_authenticated());
///
/// store
///     .login(Session { id: 1, email: "a@b.c".into(), token: "t0k".into() })
///     .expect("in-memory write");
/// assert_eq!(store.persisted_token().as_deref(), Some("t0k"));
/// ```
pub struct AuthStore {
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl AuthStore {
    /// Open the store and hydrate the session from storage.
    ///
    /// An absent or unreadable record yields an unauthenticated store.
    pub fn open(storage: Arc<dyn SessionStorage>) -> Self {
        let current = load_session(storage.as_ref());
        Self {
            storage,
            current: RwLock::new(current),
        }
    }

    /// Session currently held in memory.
    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Persist `session` and make it current, replacing any previous one.
    pub fn login(&self, session: Session) -> Result<(), SessionStorageError> {
        let record = serde_json::to_string(&PersistedAuth::from_session(session.clone()))
            .map_err(|err| SessionStorageError::write(format!("encode session: {err}")))?;
        self.storage.write(AUTH_STORAGE_KEY, &record)?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
        Ok(())
    }

    /// Remove the persisted session and forget the current one.
    pub fn logout(&self) -> Result<(), SessionStorageError> {
        self.storage.remove(AUTH_STORAGE_KEY)?;
        self.forget();
        Ok(())
    }

    /// Token from the persisted record, read fresh on every call.
    ///
    /// Missing records, storage failures and malformed JSON all yield `None`;
    /// the latter two are logged.
    pub fn persisted_token(&self) -> Option<String> {
        let raw = match self.storage.read(AUTH_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                warn!(%error, "failed to read persisted session; continuing unauthenticated");
                return None;
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(record) => record
                .pointer(TOKEN_POINTER)
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
                .map(str::to_owned),
            Err(error) => {
                warn!(%error, "failed to parse persisted session; continuing unauthenticated");
                None
            }
        }
    }

    /// Forced logout after the backend rejected the token.
    ///
    /// Storage failures are logged rather than raised so the caller still
    /// receives the original HTTP error.
    pub fn clear_expired(&self) {
        if let Err(error) = self.storage.remove(AUTH_STORAGE_KEY) {
            warn!(%error, "failed to remove expired session from storage");
        }
        self.forget();
    }

    fn forget(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

fn load_session(storage: &dyn SessionStorage) -> Option<Session> {
    let raw = match storage.read(AUTH_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no persisted session");
            return None;
        }
        Err(error) => {
            warn!(%error, "failed to read persisted session");
            return None;
        }
    };
    match serde_json::from_str::<PersistedAuth>(&raw) {
        Ok(record) => record.state.user,
        Err(error) => {
            warn!(%error, "discarding malformed persisted session");
            None
        }
    }
}
