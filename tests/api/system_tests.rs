use actix_web::{
    http::{header, StatusCode},
    test,
};
use serde_json::Value;
use template_api::bootstrap::build_app;
use template_api::config::Environment;

use crate::common::{settings_for, without_docs, TestContext};

#[actix_rt::test]
async fn unknown_route_returns_problem_details() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Not Found");
}

#[actix_rt::test]
async fn production_exposes_probe_health_routes() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    for (uri, expected) in [
        ("/health/ready", StatusCode::OK),
        ("/health/alive", StatusCode::OK),
        ("/health", StatusCode::NOT_FOUND),
        ("/alive", StatusCode::NOT_FOUND),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "unexpected status for {uri}");
    }
}

#[actix_rt::test]
async fn development_exposes_platform_health_routes() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Development),
    ))
    .await;

    for (uri, expected) in [
        ("/health", StatusCode::OK),
        ("/alive", StatusCode::OK),
        ("/health/ready", StatusCode::NOT_FOUND),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "unexpected status for {uri}");
    }
}

#[actix_rt::test]
async fn failing_database_fails_readiness_but_not_liveness() {
    let ctx = TestContext::with_database_health(false);
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let req = test::TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["entries"]["database"]["status"], "Unhealthy");
    assert_eq!(body["entries"]["database"]["description"], "connection refused");

    let req = test::TestRequest::get().uri("/health/alive").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn openapi_document_is_served_when_docs_are_enabled() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let req = test::TestRequest::get().uri("/openapi/v1.json").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["paths"]["/api/categories"].is_object());
    assert!(body["paths"]["/api/items/{id}"].is_object());
}

#[actix_rt::test]
async fn docs_are_absent_when_switched_off() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        without_docs(settings_for(Environment::Production)),
    ))
    .await;

    let req = test::TestRequest::get().uri("/openapi/v1.json").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn responses_carry_a_request_id() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/api/categories")
        .insert_header(("x-request-id", "trace-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-123");

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));
}
