use actix_web::{HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;
use serde_json::json;

use crate::error::AppError;

/// Protected profile view. By the time this runs, the dispatcher has already
/// passed the request through the remote validator.
pub fn user_profile(req: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, AppError>> {
    Box::pin(async move {
        let user_id = req
            .match_info()
            .get("userID")
            .map(str::to_owned)
            .ok_or_else(|| AppError::internal("route pattern is missing the userID segment"))?;

        Ok(HttpResponse::Ok().json(json!({
            "userID": user_id,
            "status": "ok",
        })))
    })
}
