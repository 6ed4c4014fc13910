use async_trait::async_trait;

use crate::error::AppError;

/// A trust-establishment strategy: given the acting user and the raw
/// authorization header value, allow the request or deny it with the error
/// that becomes the client-visible response.
///
/// Two variants ship with the gateway: `LocalValidator` (cryptographic
/// verification against a shared secret) and `RemoteValidator` (delegated
/// check against the identity service). Route composition is written against
/// this trait so tests can substitute a fake.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate(&self, user_id: &str, bearer_token: &str) -> Result<(), AppError>;
}
