#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for public API
pub use auth::claims::Claims;
pub use auth::jwt::{extract_claims, AuthError};
pub use auth::local::LocalValidator;
pub use auth::remote::RemoteValidator;
pub use auth::validator::TokenValidator;
pub use error::AppError;
pub use middleware::access_log::AccessLog;
pub use middleware::require_auth::RequireAuth;
pub use routes::{attach_routes, build_routes, Route};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
