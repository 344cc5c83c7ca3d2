use axum::http::{HeaderName, HeaderValue, StatusCode, header::COOKIE, header::SET_COOKIE};
use axum_test::{TestResponse, TestServer};
use futures::StreamExt;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use uuid::Uuid;

use ink_auth::domain::types::SessionEventKind;
use ink_auth::infra::events::BroadcastSessionEvents;
use ink_auth::router::build_router;
use ink_auth::state::AppState;
use ink_auth_types::token::JwtSecret;
use ink_testing::{TEST_JWT_SECRET, auth::MockAuth};

use crate::helpers::ALLOWED_EMAIL;

/// Router over a disconnected database: only paths that finish before the
/// first query are exercised here.
fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        cookie_domain: String::new(),
        allowed_email: ALLOWED_EMAIL.to_owned(),
        session_events: BroadcastSessionEvents::default(),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_report_alive_but_not_ready_without_database() {
    let server = server();
    let resp = server.get("/healthz").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let resp = server.get("/readyz").await;
    assert_eq!(resp.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.json::<Value>()["status"], "unavailable");
}

#[tokio::test]
async fn should_forbid_sign_up_for_other_email() {
    let resp = server()
        .post("/auth/users")
        .json(&json!({ "email": "intruder@example.com", "password": "long-enough-password" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(resp.json::<Value>()["kind"], "EMAIL_NOT_ALLOWED");
}

#[tokio::test]
async fn should_reject_short_password_on_sign_up() {
    let resp = server()
        .post("/auth/users")
        .json(&json!({ "email": ALLOWED_EMAIL, "password": "short" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_PASSWORD");
}

#[tokio::test]
async fn should_forbid_sign_in_for_other_email() {
    let resp = server()
        .post("/auth/token")
        .json(&json!({ "email": "intruder@example.com", "password": "whatever-it-is" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(resp.json::<Value>()["kind"], "EMAIL_NOT_ALLOWED");
}

#[tokio::test]
async fn should_reject_session_lookup_without_token() {
    let resp = server().get("/auth/token").await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_TOKEN");
}

#[tokio::test]
async fn should_reject_refresh_without_refresh_cookie() {
    let resp = server().patch("/auth/token").await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_REFRESH_TOKEN");
}

fn cleared_cookies(resp: &TestResponse) -> Vec<String> {
    resp.headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_owned))
        .filter(|c| c.contains("Max-Age=0"))
        .collect()
}

#[tokio::test]
async fn should_clear_cookies_on_sign_out_without_valid_token() {
    let expired_or_garbage = HeaderValue::from_static("ink_access_token=expired.jwt.value");
    let resp = server()
        .delete("/auth/token")
        .add_header(COOKIE, expired_or_garbage)
        .await;

    assert_eq!(resp.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(cleared_cookies(&resp).len(), 2);
}

#[tokio::test]
async fn should_publish_signed_out_for_known_caller() {
    let events = BroadcastSessionEvents::default();
    let me = Uuid::now_v7();
    let stream = events.subscribe(me);
    futures::pin_mut!(stream);

    let state = AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        cookie_domain: String::new(),
        allowed_email: ALLOWED_EMAIL.to_owned(),
        session_events: events.clone(),
    };
    let server = TestServer::new(build_router(state)).unwrap();

    let resp = server
        .delete("/auth/token")
        .add_header(COOKIE, MockAuth::new(me).cookie())
        .await;
    assert_eq!(resp.status_code(), StatusCode::NO_CONTENT);

    let event = tokio::time::timeout(std::time::Duration::from_secs(5), stream.next())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event.user_id, me);
    assert_eq!(event.kind, SessionEventKind::SignedOut);
}

#[tokio::test]
async fn should_clear_cookies_on_sign_out() {
    let auth = MockAuth::new(Uuid::now_v7());
    let resp = server()
        .delete("/auth/token")
        .add_header(COOKIE, auth.cookie())
        .await;

    assert_eq!(resp.status_code(), StatusCode::NO_CONTENT);
    let cookies = cleared_cookies(&resp);
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("ink_access_token=")));
    assert!(cookies.iter().any(|c| c.starts_with("ink_refresh_token=")));
}

#[tokio::test]
async fn should_require_identity_for_session_events() {
    let resp = server().get("/auth/session/events").await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);

    let resp = server()
        .get("/auth/session/events")
        .add_header(
            HeaderName::from_static("authorization"),
            HeaderValue::from_static("Bearer not-a-token"),
        )
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_render_unparseable_sign_up_body_as_invalid_request() {
    let server = server();

    let resp = server
        .post("/auth/users")
        .json(&json!({ "email": ALLOWED_EMAIL }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_REQUEST");

    let resp = server.post("/auth/token").text("email=someone").await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_REQUEST");
}
