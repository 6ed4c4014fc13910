use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::warn;

use crate::error::AppError;

/// Bound on the health probe so a wedged pool cannot stall `/health`.
const STATUS_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Build a lazy pool: no connection is attempted until first use, so the
/// gateway starts even when the database is down and the probe reports the
/// failure per request instead.
pub fn connect_lazy(database_url: &str) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)
        .map_err(|e| AppError::config(format!("invalid database URL: {e}")))
}

/// Round-trip connectivity check.
pub async fn db_status(pool: &PgPool) -> Result<(), AppError> {
    match tokio::time::timeout(STATUS_PROBE_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await
    {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => {
            warn!(error = %e, "database status probe failed");
            Err(AppError::db_unavailable(e.to_string()))
        }
        Err(_) => {
            warn!("database status probe timed out");
            Err(AppError::db_unavailable("status probe timed out"))
        }
    }
}
