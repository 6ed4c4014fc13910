use async_trait::async_trait;

use crate::auth::jwt::extract_claims;
use crate::auth::validator::TokenValidator;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Token validation by local signature verification. The acting user id is
/// not consulted; trust comes entirely from the credential itself.
pub struct LocalValidator {
    security: SecurityConfig,
}

impl LocalValidator {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }
}

#[async_trait]
impl TokenValidator for LocalValidator {
    async fn validate(&self, _user_id: &str, bearer_token: &str) -> Result<(), AppError> {
        extract_claims(bearer_token, &self.security)?;
        Ok(())
    }
}
