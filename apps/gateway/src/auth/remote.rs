use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::{error, warn};

use crate::auth::validator::TokenValidator;
use crate::error::AppError;

/// Upper bound on one delegated validation call. A hung identity service
/// must not pin inbound request tasks indefinitely; hitting the bound is a
/// transport failure, not an authorization verdict.
const VALIDATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Token validation delegated to the identity service:
/// `GET <base_url>/users/{userID}/validatetoken` with the original
/// authorization header forwarded verbatim. Any 2xx allows the request; any
/// other status denies it. Results are never cached, so every protected call
/// sees fresh authorization state.
pub struct RemoteValidator {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteValidator {
    /// Build a validator with its own long-lived HTTP client. Construct once
    /// at startup and share; the client pools connections internally.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(VALIDATE_TIMEOUT)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl TokenValidator for RemoteValidator {
    async fn validate(&self, user_id: &str, bearer_token: &str) -> Result<(), AppError> {
        let url = format!("{}/users/{}/validatetoken", self.base_url, user_id);

        let resp = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, bearer_token)
            .send()
            .await
            .map_err(|e| {
                error!(%url, error = %e, "identity service unreachable");
                AppError::upstream(e.to_string())
            })?;

        if !resp.status().is_success() {
            warn!(%url, status = %resp.status(), "identity service rejected token");
            return Err(AppError::verification_failed());
        }

        Ok(())
    }
}
