/// JWT verification settings, captured once at startup and passed by value.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Symmetric signing secret. May legitimately be empty when the gateway
    /// runs in remote-validation-only mode; the token parser then reports
    /// the missing secret as its own failure class at parse time.
    pub jwt_secret: Vec<u8>,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Read `JWT_TOKEN_SECRET` from the process environment. Absence is not
    /// fatal here; it surfaces per-parse as "authentication secret not
    /// found".
    pub fn from_env() -> Self {
        Self::new(std::env::var("JWT_TOKEN_SECRET").unwrap_or_default())
    }
}
