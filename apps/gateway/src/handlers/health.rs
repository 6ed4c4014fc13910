use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;
use serde_json::json;

use crate::error::AppError;
use crate::infra::db::db_status;
use crate::state::app_state::AppState;

/// Liveness report. Always 200; the database verdict rides along in the
/// body so a broken pool degrades the report, not the endpoint.
pub fn health(req: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, AppError>> {
    Box::pin(async move {
        let pool = req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| state.db.clone());

        let db_report = match pool {
            Some(pool) => match db_status(&pool).await {
                Ok(()) => "connected".to_string(),
                Err(e) => e.to_string(),
            },
            None => "not configured".to_string(),
        };

        Ok(HttpResponse::Ok().json(json!({
            "status": "alive",
            "db": db_report,
        })))
    })
}
