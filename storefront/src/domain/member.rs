//! Member account payloads returned by the backend.

use serde::{Deserialize, Serialize};

/// Backend identifier for a member.
pub type MemberId = u64;

/// Response to `POST /api/members/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRegisterResponse {
    /// New member identifier.
    pub id: MemberId,
    /// Registered email address.
    pub email: String,
    /// Whether the member opted into marketing messages.
    pub marketing_agreed: bool,
    /// Creation timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the backend.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response to `POST /api/members/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberLoginResponse {
    /// Member identifier.
    pub id: MemberId,
    /// Member email address.
    pub email: String,
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Creation timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the backend.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl std::fmt::Debug for MemberLoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberLoginResponse")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
