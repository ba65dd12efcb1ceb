//! Router tests for session, access, and validation paths.
//!
//! None of these requests reach the database, so the state carries a
//! disconnected connection.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use rstest::rstest;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

use aerodesk_api::{AppState, create_router};
use aerodesk_shared::config::ServerConfig;
use aerodesk_shared::{Claims, JwtService, SessionConfig, types::UserId};

fn app() -> Router {
    let state = AppState::new(DatabaseConnection::default(), SessionConfig::default());
    create_router(state, &ServerConfig::default())
}

fn token(role: &str) -> String {
    JwtService::new(&SessionConfig::default())
        .generate_session_token(UserId::new(1), role)
        .unwrap()
}

fn report_request(session: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/v1/reports")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = session {
        builder = builder.header(header::COOKIE, format!("aerodesk_session={token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn valid_body() -> Value {
    json!({
        "category": "tickets",
        "startDate": "2025-01-01",
        "endDate": "2025-01-31"
    })
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_without_database() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "down");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_report_without_session_is_unauthorized() {
    let (status, body) = send(report_request(None, &valid_body())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "MISSING_SESSION");
}

#[tokio::test]
async fn test_report_with_garbage_session_is_unauthorized() {
    let (status, body) = send(report_request(Some("not-a-token"), &valid_body())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "INVALID_SESSION");
}

#[tokio::test]
async fn test_report_with_expired_session_is_unauthorized() {
    let service = JwtService::new(&SessionConfig::default());
    let claims = Claims::new(UserId::new(1), "admin", Utc::now() - Duration::hours(2));
    let expired = service.encode_claims(&claims).unwrap();

    let (status, body) = send(report_request(Some(&expired), &valid_body())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "SESSION_EXPIRED");
}

#[tokio::test]
async fn test_report_for_customer_is_forbidden() {
    let (status, body) = send(report_request(Some(&token("customer")), &valid_body())).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_bearer_header_accepted() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/reports")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token("customer")))
        .body(Body::from(valid_body().to_string()))
        .unwrap();

    let (status, _) = send(request).await;

    // Authenticated, so the admin check is what rejects it
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[rstest]
#[case::unknown_category(json!({"category": "foo", "startDate": "2025-01-01", "endDate": "2025-01-31"}))]
#[case::reversed_range(json!({"category": "sales", "startDate": "2025-02-01", "endDate": "2025-01-01"}))]
#[case::unknown_filter(json!({
    "category": "sales", "startDate": "2025-01-01", "endDate": "2025-01-31",
    "filter": {"type": "airport", "value": "JFK"}
}))]
#[case::non_numeric_type(json!({
    "category": "occupation", "startDate": "2025-01-01", "endDate": "2025-01-31",
    "filter": {"type": "type", "value": "Domestic"}
}))]
#[case::missing_dates(json!({"category": "tickets"}))]
#[case::bad_date(json!({"category": "tickets", "startDate": "01/01/2025", "endDate": "2025-01-31"}))]
#[tokio::test]
async fn test_admin_invalid_request_is_bad_request(#[case] body: Value) {
    let (status, response) = send(report_request(Some(&token("admin")), &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "VALIDATION_ERROR");
    assert!(response["message"].is_string());
}

#[tokio::test]
async fn test_me_without_session_is_unauthorized() {
    let request = Request::builder()
        .uri("/api/v1/auth/me")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "MISSING_SESSION");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/logout")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cookie.starts_with("aerodesk_session="));
}

#[tokio::test]
async fn test_login_with_malformed_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email": "ops@aerodesk.test"}"#))
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}
