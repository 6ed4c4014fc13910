pub mod access_log;
pub mod require_auth;

pub use access_log::AccessLog;
pub use require_auth::RequireAuth;
