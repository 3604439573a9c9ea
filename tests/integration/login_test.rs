//! Integration tests for `POST /api/v1/login`
//!
//! Mirrors the contract clients rely on: success, wrong password, wrong
//! email, missing fields and extra fields, plus the status/code agreement.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::test::{TestRequest, call_service, read_body_json};
use gatehouse::requests::v1::auth::LoginRequest;
use gatehouse::testing::setup;
use serde_json::{Value, json};

const ADMIN_EMAIL: &str = "admin@gmail.com";
const ADMIN_PASSWORD: &str = "123";
const ADMIN_WRONG_EMAIL: &str = "admin@wrong.com";
const ADMIN_WRONG_PASSWORD: &str = "1234";

/// Body and status of a login call
macro_rules! login {
    ($service:expr, $body:expr) => {{
        let req = TestRequest::post()
            .uri("/api/v1/login")
            .set_json($body)
            .to_request();

        let resp = call_service(&$service, req).await;
        let status = resp.status();
        let body: Value = read_body_json(resp).await;

        (status, body)
    }};
}

/// Whichever code the body embeds must equal the HTTP status
fn assert_code_matches(status: StatusCode, body: &Value) {
    let embedded = body["meta"]["code"]
        .as_u64()
        .or_else(|| body["error"]["statusCode"].as_u64())
        .expect("response should embed a code");

    assert_eq!(embedded, status.as_u16() as u64);
}

// =============================================================================
// SUCCESS
// =============================================================================

#[actix_web::test]
async fn test_login_success() {
    let (service, db) = gatehouse::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_user(&db, &hasher, ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let (status, body) = login!(service, &LoginRequest::new(ADMIN_EMAIL, ADMIN_PASSWORD));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login Successful");
    assert_code_matches(status, &body);

    assert_eq!(body["data"]["user"]["id"], user.id);
    assert_eq!(body["data"]["user"]["email"], ADMIN_EMAIL);
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    assert!(body["data"]["user"].get("password").is_none());
    assert!(!body.to_string().contains(&user.password));
}

#[actix_web::test]
async fn test_each_login_issues_a_new_token() {
    let (service, db) = gatehouse::service!();
    let hasher = setup::password_hasher().unwrap();
    setup::create_user(&db, &hasher, ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let (_, first) = login!(service, &LoginRequest::new(ADMIN_EMAIL, ADMIN_PASSWORD));
    let (_, second) = login!(service, &LoginRequest::new(ADMIN_EMAIL, ADMIN_PASSWORD));

    assert_ne!(first["data"]["token"], second["data"]["token"]);
}

#[actix_web::test]
async fn test_login_trims_email() {
    let (service, db) = gatehouse::service!();
    let hasher = setup::password_hasher().unwrap();
    setup::create_user(&db, &hasher, ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let (status, body) = login!(service, &json!({ "email": " admin@gmail.com ", "password": ADMIN_PASSWORD }));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login Successful");
}

// =============================================================================
// WRONG CREDENTIALS
// =============================================================================

#[actix_web::test]
async fn test_login_wrong_password() {
    let (service, db) = gatehouse::service!();
    let hasher = setup::password_hasher().unwrap();
    setup::create_user(&db, &hasher, ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let (status, body) = login!(service, &LoginRequest::new(ADMIN_EMAIL, ADMIN_WRONG_PASSWORD));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Wrong credentials");
    assert_code_matches(status, &body);
}

#[actix_web::test]
async fn test_login_wrong_email() {
    let (service, db) = gatehouse::service!();
    let hasher = setup::password_hasher().unwrap();
    setup::create_user(&db, &hasher, ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let (status, body) = login!(service, &LoginRequest::new(ADMIN_WRONG_EMAIL, ADMIN_PASSWORD));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Wrong credentials");
    assert_code_matches(status, &body);
}

#[actix_web::test]
async fn test_email_lookup_is_exact() {
    let (service, db) = gatehouse::service!();
    let hasher = setup::password_hasher().unwrap();
    setup::create_user(&db, &hasher, ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let (status, body) = login!(service, &LoginRequest::new("ADMIN@gmail.com", ADMIN_PASSWORD));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Wrong credentials");
}

// =============================================================================
// MISSING FIELDS
// =============================================================================

#[actix_web::test]
async fn test_login_empty_password() {
    let (service, _db) = gatehouse::service!();

    let (status, body) = login!(service, &json!({ "email": ADMIN_EMAIL }));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["meta"]["code"], 400);
    assert_eq!(body["message"], "Please enter the necessary fields");
}

#[actix_web::test]
async fn test_login_empty_email() {
    let (service, _db) = gatehouse::service!();

    let (status, body) = login!(service, &json!({ "password": ADMIN_PASSWORD }));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["meta"]["code"], 400);
    assert_eq!(body["message"], "Please enter the necessary fields");
}

#[actix_web::test]
async fn test_login_empty_email_and_password() {
    let (service, _db) = gatehouse::service!();

    let (status, body) = login!(service, &json!({}));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["meta"]["code"], 400);
    assert_eq!(body["message"], "Please enter the necessary fields");
    assert!(body.get("error").is_none());
}

#[actix_web::test]
async fn test_login_blank_strings_count_as_missing() {
    let (service, _db) = gatehouse::service!();

    for payload in [
        json!({ "email": "", "password": ADMIN_PASSWORD }),
        json!({ "email": "   ", "password": ADMIN_PASSWORD }),
        json!({ "email": ADMIN_EMAIL, "password": "" }),
        json!({ "email": null, "password": null }),
    ] {
        let (status, body) = login!(service, &payload);

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body["message"], "Please enter the necessary fields");
        assert_code_matches(status, &body);
    }
}

// =============================================================================
// SHAPE VALIDATION
// =============================================================================

#[actix_web::test]
async fn test_login_req_with_extra_details() {
    let (service, db) = gatehouse::service!();
    let hasher = setup::password_hasher().unwrap();
    setup::create_user(&db, &hasher, ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let (status, body) = login!(
        service,
        &json!({
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD,
            "name": "John Doe",
        })
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation Failed");
    assert_eq!(body["error"]["statusCode"], 400);
    assert!(body.get("data").is_none());
    assert_code_matches(status, &body);
}

#[actix_web::test]
async fn test_extra_field_wins_over_missing_fields() {
    let (service, _db) = gatehouse::service!();

    let (status, body) = login!(service, &json!({ "name": "John Doe" }));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation Failed");
    assert_eq!(body["error"]["statusCode"], 400);
}

#[actix_web::test]
async fn test_wrongly_typed_fields_fail_validation() {
    let (service, _db) = gatehouse::service!();

    for payload in [
        json!({ "email": 1, "password": ADMIN_PASSWORD }),
        json!({ "email": ADMIN_EMAIL, "password": true }),
        json!([ADMIN_EMAIL, ADMIN_PASSWORD]),
    ] {
        let (status, body) = login!(service, &payload);

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body["message"], "Validation Failed");
        assert_eq!(body["error"]["statusCode"], 400);
    }
}

#[actix_web::test]
async fn test_malformed_json_fails_validation() {
    let (service, _db) = gatehouse::service!();

    let req = TestRequest::post()
        .uri("/api/v1/login")
        .insert_header(ContentType::json())
        .set_payload("{\"email\": ")
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation Failed");
    assert_eq!(body["error"]["statusCode"], 400);
}

#[actix_web::test]
async fn test_non_json_content_type_fails_validation() {
    let (service, _db) = gatehouse::service!();

    let req = TestRequest::post()
        .uri("/api/v1/login")
        .insert_header(ContentType::plaintext())
        .set_payload("email=admin@gmail.com&password=123")
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Validation Failed");
}

#[actix_web::test]
async fn test_login_is_only_post() {
    let (service, _db) = gatehouse::service!();

    let req = TestRequest::get().uri("/api/v1/login").to_request();
    let resp = call_service(&service, req).await;

    // The method guard sits on the resource, so a GET matches nothing.
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// INTERNAL ERRORS
// =============================================================================

#[actix_web::test]
async fn test_database_failure_is_internal_server_error() {
    use sea_orm::ConnectionTrait;

    let (service, db) = gatehouse::service!();
    db.execute_unprepared("DROP TABLE users").await.unwrap();

    let (status, body) = login!(service, &LoginRequest::new(ADMIN_EMAIL, ADMIN_PASSWORD));

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Internal Server Error");
    assert_eq!(body["meta"]["code"], 500);
    assert!(body.get("error").is_none());
    assert!(body.get("data").is_none());
    assert_code_matches(status, &body);

    let text = body.to_string();
    assert!(!text.contains("no such table"));
    assert!(!text.contains("users"));
}
