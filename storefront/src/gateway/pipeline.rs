//! Ordered request decorators and response stages.
//!
//! Decorators run before the transport sees a request; stages run on every
//! response that came back. A stage either lets the response through or
//! turns it into an [`ApiError`], which stops the remaining stages.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::domain::ApiError;
use crate::domain::AuthStore;
use crate::domain::ports::{APPLICATION_ROOT, Navigator, OutboundRequest, TransportResponse};

const JSON_MEDIA_TYPE: &str = "application/json";
const UNAUTHORIZED: u16 = 401;

/// Mutates an outgoing request before it is sent.
pub trait RequestDecorator: Send + Sync {
    /// Apply this decorator to `request`.
    fn decorate(&self, request: &mut OutboundRequest);
}

/// Inspects a received response.
pub trait ResponseStage: Send + Sync {
    /// Let `response` through, or fail the call.
    fn inspect(&self, response: &TransportResponse) -> Result<(), ApiError>;
}

/// Declares JSON request and response bodies.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonContentType;

impl RequestDecorator for JsonContentType {
    fn decorate(&self, request: &mut OutboundRequest) {
        request.set_header("content-type", JSON_MEDIA_TYPE);
        request.set_header("accept", JSON_MEDIA_TYPE);
    }
}

/// Attaches `Authorization: Bearer <token>` when a session is persisted.
///
/// The record is read on every request, never cached.
#[derive(Debug, Clone)]
pub struct BearerToken {
    auth: Arc<AuthStore>,
}

impl BearerToken {
    /// Decorator backed by `auth`.
    pub fn new(auth: Arc<AuthStore>) -> Self {
        Self { auth }
    }
}

impl RequestDecorator for BearerToken {
    fn decorate(&self, request: &mut OutboundRequest) {
        if let Some(token) = self.auth.persisted_token() {
            request.set_header("authorization", format!("Bearer {token}"));
        }
    }
}

/// Forced logout when the backend rejects the session.
///
/// On `401` the persisted session is cleared and the navigator is sent to the
/// application root. The response then continues to [`StatusGuard`], so the
/// caller still receives the HTTP error.
pub struct SessionExpiryGuard {
    auth: Arc<AuthStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionExpiryGuard {
    /// Guard clearing `auth` and redirecting through `navigator`.
    pub fn new(auth: Arc<AuthStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { auth, navigator }
    }
}

impl ResponseStage for SessionExpiryGuard {
    fn inspect(&self, response: &TransportResponse) -> Result<(), ApiError> {
        if response.status == UNAUTHORIZED {
            warn!("session rejected by backend; signing out");
            self.auth.clear_expired();
            self.navigator.navigate(APPLICATION_ROOT);
        }
        Ok(())
    }
}

/// Converts non-2xx responses into [`ApiError::Http`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusGuard;

impl ResponseStage for StatusGuard {
    fn inspect(&self, response: &TransportResponse) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }
        Err(ApiError::http(
            response.status,
            error_message(response.status, &response.body),
        ))
    }
}

/// User-facing message for an error response.
///
/// Uses the body's `message` field when it is a non-empty string, otherwise
/// `"HTTP error! status: <status>"`.
///
/// # Examples
/// ```
/// use storefront::gateway::error_message;
///
/// assert_eq!(error_message(404, br#"{"message":"not found"}"#), "not found");
/// assert_eq!(error_message(500, b"<html>"), "HTTP error! status: 500");
/// ```
pub fn error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map_or_else(
            || ApiError::http_status(status).to_string(),
            str::to_owned,
        )
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{HttpMethod, MockNavigator};
    use crate::domain::{AUTH_STORAGE_KEY, Session};
    use crate::domain::ports::SessionStorage;
    use crate::outbound::storage::InMemorySessionStorage;
    use rstest::{fixture, rstest};

    #[fixture]
    fn storage() -> Arc<InMemorySessionStorage> {
        Arc::new(InMemorySessionStorage::default())
    }

    fn signed_in(storage: &Arc<InMemorySessionStorage>) -> Arc<AuthStore> {
        let auth = Arc::new(AuthStore::open(storage.clone()));
        auth.login(Session {
            id: 3,
            email: "member@example.com".to_owned(),
            token: "tok-123".to_owned(),
        })
        .expect("login succeeds");
        auth
    }

    #[test]
    fn json_content_type_sets_both_headers() {
        let mut request = OutboundRequest::new(HttpMethod::Get, "/api/products");
        JsonContentType.decorate(&mut request);

        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("accept"), Some("application/json"));
    }

    #[rstest]
    fn bearer_token_reads_the_persisted_record(storage: Arc<InMemorySessionStorage>) {
        let auth = signed_in(&storage);
        let decorator = BearerToken::new(auth);
        let mut request = OutboundRequest::new(HttpMethod::Get, "/api/products");

        decorator.decorate(&mut request);

        assert_eq!(request.header("authorization"), Some("Bearer tok-123"));
    }

    #[rstest]
    fn bearer_token_follows_external_changes(storage: Arc<InMemorySessionStorage>) {
        let auth = signed_in(&storage);
        storage
            .write(
                AUTH_STORAGE_KEY,
                r#"{"state":{"user":{"id":3,"email":"m","token":"rotated"}}}"#,
            )
            .expect("write succeeds");
        let mut request = OutboundRequest::new(HttpMethod::Get, "/x");

        BearerToken::new(auth).decorate(&mut request);

        assert_eq!(request.header("authorization"), Some("Bearer rotated"));
    }

    #[rstest]
    fn bearer_token_is_omitted_without_session(storage: Arc<InMemorySessionStorage>) {
        let auth = Arc::new(AuthStore::open(storage));
        let mut request = OutboundRequest::new(HttpMethod::Get, "/x");

        BearerToken::new(auth).decorate(&mut request);

        assert_eq!(request.header("authorization"), None);
    }

    #[rstest]
    fn expiry_guard_logs_out_and_redirects_once(storage: Arc<InMemorySessionStorage>) {
        let auth = signed_in(&storage);
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|location| location == "/")
            .times(1)
            .return_const(());
        let guard = SessionExpiryGuard::new(auth.clone(), Arc::new(navigator));

        let outcome = guard.inspect(&TransportResponse::new(401, b"{}".to_vec()));

        assert!(outcome.is_ok(), "guard lets the response continue");
        assert!(!auth.is_authenticated());
        assert!(auth.persisted_token().is_none());
    }

    #[rstest]
    #[case(200)]
    #[case(403)]
    #[case(500)]
    fn expiry_guard_ignores_other_statuses(
        storage: Arc<InMemorySessionStorage>,
        #[case] status: u16,
    ) {
        let auth = signed_in(&storage);
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().never();
        let guard = SessionExpiryGuard::new(auth.clone(), Arc::new(navigator));

        guard
            .inspect(&TransportResponse::new(status, Vec::new()))
            .expect("guard never fails");

        assert!(auth.is_authenticated());
    }

    #[rstest]
    #[case(404, r#"{"message":"not found"}"#, "not found")]
    #[case(400, r#"{"message":""}"#, "HTTP error! status: 400")]
    #[case(500, r#"{"message":42}"#, "HTTP error! status: 500")]
    #[case(502, "Bad Gateway", "HTTP error! status: 502")]
    #[case(503, "", "HTTP error! status: 503")]
    fn status_guard_normalizes_errors(
        #[case] status: u16,
        #[case] body: &str,
        #[case] expected: &str,
    ) {
        let error = StatusGuard
            .inspect(&TransportResponse::new(status, body.as_bytes().to_vec()))
            .expect_err("non-2xx fails");

        assert_eq!(error, ApiError::http(status, expected));
    }

    #[rstest]
    #[case(200)]
    #[case(201)]
    #[case(204)]
    fn status_guard_passes_success(#[case] status: u16) {
        assert!(StatusGuard.inspect(&TransportResponse::new(status, Vec::new())).is_ok());
    }
}
