use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::auth::jwt::AuthError;

/// Wire shape for every denial the gateway produces itself: a JSON object
/// with a single `message` field.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Structural request error: missing userID parameter or missing/empty
    /// authorization header. Decided locally, never reaches the network.
    #[error("authentication token was not found in the request")]
    TokenNotFound,
    /// The identity service answered with a non-success status.
    #[error("token verification failed")]
    VerificationFailed,
    /// The outbound call to the identity service did not complete. The raw
    /// transport error text is the client-visible message.
    #[error("{detail}")]
    Upstream { detail: String },
    /// Local token parsing failed; see `AuthError` for the exact cause.
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("configuration error: {detail}")]
    Config { detail: String },
    #[error("database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn token_not_found() -> Self {
        Self::TokenNotFound
    }

    pub fn verification_failed() -> Self {
        Self::VerificationFailed
    }

    pub fn upstream(detail: impl Into<String>) -> Self {
        Self::Upstream {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable(detail: impl Into<String>) -> Self {
        Self::DbUnavailable {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// HTTP status for this error. A missing signing secret is a server
    /// misconfiguration, not a bad credential, so it maps to 500 while every
    /// other parse failure stays 401.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TokenNotFound => StatusCode::UNAUTHORIZED,
            AppError::VerificationFailed => StatusCode::UNAUTHORIZED,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Auth(AuthError::SecretNotFound) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DbUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        if self.status().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        HttpResponse::build(self.status()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::AppError;
    use crate::auth::jwt::AuthError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::token_not_found().status().as_u16(), 401);
        assert_eq!(AppError::verification_failed().status().as_u16(), 401);
        assert_eq!(AppError::upstream("connection refused").status().as_u16(), 500);
        assert_eq!(
            AppError::from(AuthError::SecretNotFound).status().as_u16(),
            500
        );
        assert_eq!(
            AppError::from(AuthError::InvalidSignature).status().as_u16(),
            401
        );
    }

    #[actix_web::test]
    async fn test_denial_body_shape() {
        let resp = actix_web::error::ResponseError::error_response(&AppError::token_not_found());
        assert_eq!(resp.status().as_u16(), 401);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "authentication token was not found in the request"})
        );
    }

    #[actix_web::test]
    async fn test_upstream_body_carries_transport_error() {
        let resp = actix_web::error::ResponseError::error_response(&AppError::upstream(
            "connection refused",
        ));
        assert_eq!(resp.status().as_u16(), 500);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "connection refused");
    }
}
