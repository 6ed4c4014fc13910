//! Authentication gate for protected routes.
//!
//! Interposes a `TokenValidator` between the router and the business
//! handler. On denial the chain is terminated with the validator's error and
//! the handler never runs; on success the handler's response passes through
//! unmodified. No claims are attached to the request: this middleware only
//! gates access.

use std::sync::Arc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::auth::validator::TokenValidator;
use crate::error::AppError;

pub struct RequireAuth {
    validator: Arc<dyn TokenValidator>,
}

impl RequireAuth {
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service,
            validator: Arc::clone(&self.validator),
        }))
    }
}

pub struct RequireAuthMiddleware<S> {
    service: S,
    validator: Arc<dyn TokenValidator>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let user_id = req.match_info().get("userID").map(str::to_owned);
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_default();

        // Structurally invalid requests are refused here, before any
        // network traffic towards the identity service.
        let user_id = match user_id {
            Some(user_id) if !bearer.is_empty() => user_id,
            _ => {
                warn!(path = %req.path(), "request carried no authentication token");
                return Box::pin(async { Err(AppError::token_not_found().into()) });
            }
        };

        let validator = Arc::clone(&self.validator);
        // The downstream future is created eagerly but only polled after the
        // validator allows the request; on denial the handler never runs.
        let fut = self.service.call(req);
        Box::pin(async move {
            validator.validate(&user_id, &bearer).await?;
            fut.await
        })
    }
}
