//! Sign-up, sign-in and sign-out flows.
//!
//! Sign-in is the only writer of a fresh session: the login response's
//! `{id, email, token}` goes straight into [`AuthStore`], and the gateway
//! picks the token up on the next request.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use super::auth::{CredentialsValidationError, LoginCredentials, SignupForm, SignupRequest};
use super::member::MemberRegisterResponse;
use super::ports::{MemberAccounts, SessionStorageError};
use super::session::{AuthStore, Session};
use super::ApiError;

/// Failures surfaced by account flows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Form values were rejected before contacting the backend.
    #[error(transparent)]
    Validation(#[from] CredentialsValidationError),
    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The session could not be persisted or removed.
    #[error("failed to update stored session: {0}")]
    Storage(#[from] SessionStorageError),
}

/// Account flows over the member port and the session store.
#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn MemberAccounts>,
    auth: Arc<AuthStore>,
}

impl AccountService {
    /// Create the service.
    pub fn new(accounts: Arc<dyn MemberAccounts>, auth: Arc<AuthStore>) -> Self {
        Self { accounts, auth }
    }

    /// Validate `form` and register a new member.
    ///
    /// Registration does not sign the member in.
    pub async fn sign_up(&self, form: &SignupForm) -> Result<MemberRegisterResponse, AccountError> {
        let request = SignupRequest::try_from_form(form)?;
        let member = self.accounts.register(&request).await.inspect_err(|error| {
            warn!(%error, "registration failed");
        })?;
        info!(member_id = member.id, "member registered");
        Ok(member)
    }

    /// Log in and store the resulting session.
    pub async fn sign_in(&self, credentials: &LoginCredentials) -> Result<Session, AccountError> {
        let response = self.accounts.login(credentials).await.inspect_err(|error| {
            warn!(%error, "login failed");
        })?;
        let session = Session::from(response);
        self.auth.login(session.clone())?;
        info!(member_id = session.id, "member signed in");
        Ok(session)
    }

    /// Forget the stored session.
    pub fn sign_out(&self) -> Result<(), AccountError> {
        self.auth.logout()?;
        info!("member signed out");
        Ok(())
    }

    /// Session currently held by the store.
    pub fn current_session(&self) -> Option<Session> {
        self.auth.current()
    }
}
