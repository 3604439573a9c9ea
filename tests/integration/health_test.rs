//! Integration tests for health and metrics endpoints

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body, read_body_json};
use gatehouse::requests::v1::auth::LoginRequest;
use serde_json::Value;

#[actix_web::test]
async fn test_health_endpoint_returns_200_ok() {
    let (service, _db) = gatehouse::service!();

    let req = TestRequest::get().uri("/health").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[actix_web::test]
async fn test_health_db_reports_connected() {
    let (service, _db) = gatehouse::service!();

    let req = TestRequest::get().uri("/health/db").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[actix_web::test]
async fn test_metrics_count_login_outcomes() {
    let (service, _db) = gatehouse::service!();

    let req = TestRequest::post()
        .uri("/api/v1/login")
        .set_json(LoginRequest::new("nobody@gmail.com", "123"))
        .to_request();
    call_service(&service, req).await;

    let req = TestRequest::post()
        .uri("/api/v1/login")
        .set_json(serde_json::json!({ "email": "a@b.c", "password": "x", "name": "extra" }))
        .to_request();
    call_service(&service, req).await;

    let req = TestRequest::get().uri("/metrics").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("auth_login_attempts_total"));
    assert!(text.contains("outcome=\"wrong_credentials\""));
    assert!(text.contains("outcome=\"validation_failed\""));
}
