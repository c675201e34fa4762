//! Driving port for member registration and login.
//!
//! The port accepts validated domain inputs; adapters own the wire shape of
//! the request bodies.

use async_trait::async_trait;

use crate::domain::{
    ApiError, LoginCredentials, MemberLoginResponse, MemberRegisterResponse, SignupRequest,
};

/// Port for the member account endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberAccounts: Send + Sync {
    /// `POST /api/members/register`.
    async fn register(&self, request: &SignupRequest) -> Result<MemberRegisterResponse, ApiError>;

    /// `POST /api/members/login`.
    async fn login(&self, credentials: &LoginCredentials)
    -> Result<MemberLoginResponse, ApiError>;
}
