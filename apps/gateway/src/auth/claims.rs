use serde::{Deserialize, Serialize};

/// Verified identity decoded from a signed credential. Only
/// `auth::jwt::extract_claims` constructs one from untrusted input; a
/// non-error result there is fully verified and callers must not re-check.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Free-form role label, not constrained to an enum.
    #[serde(default)]
    pub role: String,

    /// Issued-at (seconds since epoch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry (seconds since epoch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}
