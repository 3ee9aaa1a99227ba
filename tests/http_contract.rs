use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

use users_api::{api::create_app, AppConfig, AppState, UserService};

fn app() -> Router {
    create_app(&AppConfig::default(), AppState::new(UserService::new()))
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        panic!(
            "body is not JSON ({}): {}",
            e,
            String::from_utf8_lossy(bytes)
        )
    })
}

#[tokio::test]
async fn health_reports_ok_and_version() {
    let (status, body) = send(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({"status": "ok", "version": "1.0.0"}));
}

#[tokio::test]
async fn list_users_is_empty() {
    let (status, body) = send(Method::GET, "/api/users/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!([]));
}

#[tokio::test]
async fn get_user_is_always_not_found() {
    for id in [
        "1",
        "abc",
        "00000000-0000-0000-0000-000000000000",
        "not-a-valid-id!",
        "%20",
    ] {
        let (status, body) = send(Method::GET, &format!("/api/users/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "id {:?}", id);
        let json = as_json(&body);
        assert_eq!(json["detail"], "User not found", "id {:?}", id);
        assert_eq!(json["error"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn create_user_does_not_yet_create() {
    let payload = json!({"name": "Alice Johnson", "email": "alice@example.com"});
    let (status, body) = send(Method::POST, "/api/users/", Some(payload)).await;

    assert_ne!(status, StatusCode::CREATED);
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(as_json(&body)["error"], "NOT_IMPLEMENTED");
}

#[tokio::test]
async fn create_user_rejects_invalid_payload() {
    let payload = json!({"name": "Alice Johnson", "email": "not-an-email"});
    let (status, body) = send(Method::POST, "/api/users/", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json = as_json(&body);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert!(json["detail"].as_str().unwrap().starts_with("email:"));
}

#[tokio::test]
async fn create_user_rejects_invalid_fields_with_details() {
    let payload = json!({"name": "R2-D2", "email": "alice@example.com"});
    let (status, body) = send(Method::POST, "/api/users/", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json = as_json(&body);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert!(json["details"]["name"].is_array());
    assert!(json["details"].get("email").is_none());
}

#[tokio::test]
async fn create_user_rejects_missing_fields() {
    let (status, body) = send(Method::POST, "/api/users/", Some(json!({"name": "Alice"}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json = as_json(&body);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert!(json["detail"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn create_user_rejects_malformed_json() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = as_json(&bytes);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn create_user_without_content_type_gets_json_error() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users/")
        .body(Body::from(
            json!({"name": "Alice Johnson", "email": "alice@example.com"}).to_string(),
        ))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(as_json(&bytes)["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_user_does_not_yet_update() {
    let payload = json!({"name": "Bob Updated"});
    let (status, body) = send(Method::PUT, "/api/users/42", Some(payload)).await;

    assert_ne!(status, StatusCode::OK);
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&body)["detail"], "User not found");
}

#[tokio::test]
async fn update_user_rejects_invalid_payload() {
    let payload = json!({"profile_picture_url": "ftp://example.com/a.png"});
    let (status, _) = send(Method::PUT, "/api/users/42", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_user_answers_no_content() {
    let (status, body) = send(Method::DELETE, "/api/users/42", None).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let (status, body) = send(Method::GET, "/api/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&body)["detail"], "Not Found");
}

#[tokio::test]
async fn cors_is_open_with_credentials() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "https://client.example")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://client.example"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}
