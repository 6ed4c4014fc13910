//! Declarative route registry and the single authorization decision point.
//!
//! `build_routes` is plain data: protection can be unit-tested by inspecting
//! the table without executing any handler. `attach_routes` is the only
//! place a validator is interposed; there is no secondary enforcement inside
//! handlers.

use std::sync::Arc;

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::auth::validator::TokenValidator;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::require_auth::RequireAuth;

pub type HandlerFn = fn(HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, AppError>>;

/// One exposed operation. Built once at startup, immutable thereafter.
pub struct Route {
    pub name: &'static str,
    pub method: Method,
    pub pattern: &'static str,
    pub protected: bool,
    pub handler: HandlerFn,
}

/// The fixed catalogue of exposed operations.
pub fn build_routes() -> Vec<Route> {
    vec![
        Route {
            name: "health",
            method: Method::GET,
            pattern: "/health",
            protected: false,
            handler: handlers::health,
        },
        Route {
            name: "user_profile",
            method: Method::GET,
            pattern: "/users/{userID}/profile",
            protected: true,
            handler: handlers::user_profile,
        },
    ]
}

/// Wire the registry into the router. Protected routes get the validator in
/// front of their handler; public routes get the handler alone.
pub fn attach_routes(
    cfg: &mut web::ServiceConfig,
    routes: Vec<Route>,
    validator: Arc<dyn TokenValidator>,
) {
    for route in routes {
        let resource = web::resource(route.pattern)
            .route(web::route().method(route.method).to(route.handler));
        if route.protected {
            cfg.service(resource.wrap(RequireAuth::new(Arc::clone(&validator))));
        } else {
            cfg.service(resource);
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::Method;

    use super::build_routes;

    #[test]
    fn test_protection_flags() {
        let routes = build_routes();

        let health = routes.iter().find(|r| r.name == "health").unwrap();
        assert!(!health.protected);
        assert_eq!(health.method, Method::GET);
        assert_eq!(health.pattern, "/health");

        let profile = routes.iter().find(|r| r.name == "user_profile").unwrap();
        assert!(profile.protected);
        assert_eq!(profile.method, Method::GET);
        assert_eq!(profile.pattern, "/users/{userID}/profile");
    }

    #[test]
    fn test_every_protected_route_names_the_acting_user() {
        // The auth gate reads the userID segment; a protected pattern
        // without it would deny every request.
        for route in build_routes().into_iter().filter(|r| r.protected) {
            assert!(
                route.pattern.contains("{userID}"),
                "protected route {} lacks a userID segment",
                route.name
            );
        }
    }
}
