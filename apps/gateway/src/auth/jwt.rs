use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use thiserror::Error;
use tracing::error;

use crate::auth::claims::Claims;
use crate::state::security_config::SecurityConfig;

/// Local token parsing failures. Each cause is a distinct variant so callers
/// can pick user-facing messaging; the gateway itself treats everything but
/// `SecretNotFound` as "unauthenticated".
#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("authorization header is malformed")]
    MalformedHeader,
    #[error("authentication secret not found")]
    SecretNotFound,
    #[error("unexpected signing method: {alg}")]
    UnexpectedSigningMethod { alg: String },
    #[error("token is expired")]
    TokenExpired,
    #[error("token is not valid yet")]
    TokenNotYetValid,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token is invalid: {detail}")]
    InvalidToken { detail: String },
}

/// Verify a bearer credential and decode its claims.
///
/// `bearer_token` is the raw authorization header value in the form
/// `"<scheme> <token>"` (e.g. `"bearer xxx"`): everything after the first
/// space is the token payload. Only HMAC-family signing algorithms are
/// accepted; the signing secret comes from `security`, never read from the
/// environment here.
///
/// A non-error result is a fully verified `Claims`; callers must not
/// re-validate.
pub fn extract_claims(
    bearer_token: &str,
    security: &SecurityConfig,
) -> Result<Claims, AuthError> {
    let token = match bearer_token.split_once(' ') {
        Some((_scheme, token)) if !token.trim().is_empty() => token.trim(),
        _ => return Err(AuthError::MalformedHeader),
    };

    if security.jwt_secret.is_empty() {
        // Server misconfiguration, not a bad credential. Logged so operators
        // can tell the two apart.
        error!("JWT_TOKEN_SECRET is not configured; cannot verify tokens");
        return Err(AuthError::SecretNotFound);
    }

    let header = decode_header(token).map_err(|e| AuthError::InvalidToken {
        detail: e.to_string(),
    })?;
    let alg = match header.alg {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => header.alg,
        other => {
            return Err(AuthError::UnexpectedSigningMethod {
                alg: format!("{other:?}"),
            })
        }
    };

    // exp/nbf are optional in the claim set but enforced when present.
    let mut validation = Validation::new(alg);
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        jsonwebtoken::errors::ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::InvalidToken {
            detail: e.to_string(),
        },
    })
}
