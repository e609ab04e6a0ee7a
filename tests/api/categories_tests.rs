use actix_web::{
    http::{header, StatusCode},
    test,
};
use serde_json::{json, Value};
use template_api::bootstrap::build_app;
use template_api::config::Environment;
use template_api::domain::{Category, Item};
use uuid::Uuid;

use crate::common::{bearer_token, settings_for, TestContext};

#[actix_rt::test]
async fn list_returns_categories_ordered_by_name() {
    let ctx = TestContext::new();
    ctx.categories.push(Category::new("Tools".to_string(), None));
    ctx.categories.push(Category::new("Garden".to_string(), None));
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Garden", "Tools"]);
}

#[actix_rt::test]
async fn create_without_token_succeeds_when_authentication_is_disabled() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "name": "  Tools  ", "description": "Hand tools" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("location header");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Tools");
    assert_eq!(body["description"], "Hand tools");
    assert_eq!(
        location,
        format!("/api/categories/{}", body["id"].as_str().unwrap())
    );
}

#[actix_rt::test]
async fn create_without_token_is_rejected_when_authentication_is_enabled() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Development),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "name": "Tools" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 401);
    assert!(ctx.categories.categories.lock().unwrap().is_empty());
}

#[actix_rt::test]
async fn create_with_forged_token_is_rejected() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Development),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header((header::AUTHORIZATION, "Bearer not.a.jwt"))
        .set_json(json!({ "name": "Tools" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn create_with_valid_token_succeeds_when_authentication_is_enabled() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Development),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header((header::AUTHORIZATION, bearer_token("user-1")))
        .set_json(json!({ "name": "Tools" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_rt::test]
async fn reads_stay_public_when_authentication_is_enabled() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Development),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn duplicate_name_is_a_conflict() {
    let ctx = TestContext::new();
    ctx.categories.push(Category::new("Tools".to_string(), None));
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "name": "Tools" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "category name already exists");
}

#[actix_rt::test]
async fn invalid_payloads_are_bad_requests() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let too_long = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "name": "x".repeat(101) }))
        .to_request();
    let blank = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "name": "   " }))
        .to_request();
    let malformed = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();

    for req in [too_long, blank, malformed] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_rt::test]
async fn unknown_or_malformed_id_is_not_found() {
    let ctx = TestContext::new();
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    for uri in [
        format!("/api/categories/{}", Uuid::new_v4()),
        "/api/categories/not-a-uuid".to_string(),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
    }
}

#[actix_rt::test]
async fn update_renames_and_allows_keeping_own_name() {
    let ctx = TestContext::new();
    let existing = Category::new("Tools".to_string(), None);
    let id = existing.id;
    ctx.categories.push(existing);
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{id}"))
        .set_json(json!({ "name": "Tools", "description": "Now described" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["description"], "Now described");
}

#[actix_rt::test]
async fn delete_removes_category_and_detaches_its_items() {
    let ctx = TestContext::new();
    let category = Category::new("Tools".to_string(), None);
    let category_id = category.id;
    ctx.categories.push(category);
    ctx.items
        .push(Item::new("Hammer".to_string(), None, Some(category_id)));
    let app = test::init_service(build_app(
        ctx.state.clone(),
        settings_for(Environment::Production),
    ))
    .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{category_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{category_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let items = ctx.items.snapshot();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category_id, None);
}
