use sqlx::PgPool;

use super::security_config::SecurityConfig;

/// Shared resources handed to handlers via `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database pool, used only by the health probe. Optional so the
    /// gateway (and tests) can run without a database.
    pub db: Option<PgPool>,
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(db: PgPool, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
        }
    }

    pub fn without_db(security: SecurityConfig) -> Self {
        Self { db: None, security }
    }
}
