//! End-to-end composition: the route registry wired through `attach_routes`,
//! exercised with both the real remote validator and substitute strategies.

use std::sync::Arc;

use actix_web::body::to_bytes;
use actix_web::dev::Service;
use actix_web::{test, web, App};
use async_trait::async_trait;
use gateway::{
    attach_routes, build_routes, AppError, AppState, RemoteValidator, SecurityConfig,
    TokenValidator,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct AllowAll;

#[async_trait]
impl TokenValidator for AllowAll {
    async fn validate(&self, _user_id: &str, _bearer_token: &str) -> Result<(), AppError> {
        Ok(())
    }
}

struct DenyAll;

#[async_trait]
impl TokenValidator for DenyAll {
    async fn validate(&self, _user_id: &str, _bearer_token: &str) -> Result<(), AppError> {
        Err(AppError::verification_failed())
    }
}

async fn build_gateway(
    validator: Arc<dyn TokenValidator>,
) -> impl Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let data = web::Data::new(AppState::without_db(SecurityConfig::new("test-secret")));
    test::init_service(
        App::new()
            .app_data(data)
            .configure(move |cfg| attach_routes(cfg, build_routes(), validator)),
    )
    .await
}

async fn denial(err: actix_web::Error) -> (u16, Value) {
    let resp = err.as_response_error().error_response();
    let status = resp.status().as_u16();
    let body = to_bytes(resp.into_body()).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[actix_web::test]
async fn test_profile_end_to_end_with_identity_service() {
    let identity = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/validatetoken"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&identity)
        .await;

    let validator: Arc<dyn TokenValidator> =
        Arc::new(RemoteValidator::new(identity.uri()).unwrap());
    let app = build_gateway(validator).await;

    let req = test::TestRequest::get()
        .uri("/users/alice/profile")
        .insert_header(("authorization", "bearer tok123"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"userID": "alice", "status": "ok"}));
}

#[actix_web::test]
async fn test_profile_without_token_is_rejected_before_the_identity_service() {
    let identity = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&identity)
        .await;

    let validator: Arc<dyn TokenValidator> =
        Arc::new(RemoteValidator::new(identity.uri()).unwrap());
    let app = build_gateway(validator).await;

    let req = test::TestRequest::get()
        .uri("/users/alice/profile")
        .insert_header(("authorization", ""))
        .to_request();
    let err = app.call(req).await.expect_err("expected denial");

    let (status, body) = denial(err).await;
    assert_eq!(status, 401);
    assert_eq!(
        body,
        json!({"message": "authentication token was not found in the request"})
    );
}

#[actix_web::test]
async fn test_profile_with_rejecting_identity_service() {
    let identity = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&identity)
        .await;

    let validator: Arc<dyn TokenValidator> =
        Arc::new(RemoteValidator::new(identity.uri()).unwrap());
    let app = build_gateway(validator).await;

    let req = test::TestRequest::get()
        .uri("/users/alice/profile")
        .insert_header(("authorization", "bearer tok123"))
        .to_request();
    let err = app.call(req).await.expect_err("expected denial");

    let (status, body) = denial(err).await;
    assert_eq!(status, 401);
    assert_eq!(body, json!({"message": "token verification failed"}));
}

#[actix_web::test]
async fn test_health_is_public() {
    // DenyAll would block anything routed through the auth gate; health must
    // not be.
    let app = build_gateway(Arc::new(DenyAll)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "alive");
    assert_eq!(body["db"], "not configured");
}

#[actix_web::test]
async fn test_composition_is_strategy_agnostic() {
    // Substitute validators exercise the wiring without any identity
    // service.
    let app = build_gateway(Arc::new(AllowAll)).await;
    let req = test::TestRequest::get()
        .uri("/users/bob/profile")
        .insert_header(("authorization", "bearer anything"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let app = build_gateway(Arc::new(DenyAll)).await;
    let req = test::TestRequest::get()
        .uri("/users/bob/profile")
        .insert_header(("authorization", "bearer anything"))
        .to_request();
    let err = app.call(req).await.expect_err("expected denial");
    let (status, _) = denial(err).await;
    assert_eq!(status, 401);
}
