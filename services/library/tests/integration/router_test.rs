use axum::http::{
    HeaderValue, StatusCode,
    header::{AUTHORIZATION, COOKIE},
};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use uuid::Uuid;

use ink_auth_types::token::JwtSecret;
use ink_library::router::build_router;
use ink_library::state::AppState;
use ink_testing::{TEST_JWT_SECRET, auth::MockAuth};

/// Router over a disconnected database: only paths that finish before the
/// first query are exercised here.
fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn book_body(title: &str, rating: i16) -> Value {
    json!({
        "title": title,
        "author": "Someone",
        "rating": rating,
        "read_date": "2024-06-01",
        "content": "<p>notes</p>",
        "tag_ids": [],
    })
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
async fn should_list_both_templates() {
    let resp = server().get("/templates").await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let body = resp.json::<Value>();
    let templates = body.as_array().unwrap();
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0]["kind"], "business");
    assert_eq!(templates[1]["kind"], "novel");
    assert!(
        templates[0]["content"]
            .as_str()
            .unwrap()
            .starts_with("<h1>")
    );
}

#[tokio::test]
async fn should_require_auth_for_book_writes() {
    let server = server();
    let id = Uuid::now_v7();

    let resp = server.post("/books").json(&book_body("Title", 4)).await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["kind"], "UNAUTHENTICATED");

    let resp = server
        .put(&format!("/books/{id}"))
        .json(&book_body("Title", 4))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);

    let resp = server.delete(&format!("/books/{id}")).await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_refresh_token_as_credentials() {
    let auth = MockAuth::new(Uuid::now_v7());
    let resp = server()
        .post("/books")
        .add_header(
            COOKIE,
            HeaderValue::from_str(&format!("ink_access_token={}", auth.refresh_token())).unwrap(),
        )
        .json(&book_body("Title", 4))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_blank_title() {
    let auth = MockAuth::new(Uuid::now_v7());
    let resp = server()
        .post("/books")
        .add_header(COOKIE, auth.cookie())
        .json(&book_body("   ", 4))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_TITLE");
}

#[tokio::test]
async fn should_reject_unrated_book() {
    let auth = MockAuth::new(Uuid::now_v7());
    let resp = server()
        .post("/books")
        .add_header(COOKIE, auth.cookie())
        .json(&book_body("Title", 0))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_RATING");
}

#[tokio::test]
async fn should_validate_update_before_lookup() {
    let auth = MockAuth::new(Uuid::now_v7());
    let resp = server()
        .put(&format!("/books/{}", Uuid::now_v7()))
        .add_header(COOKIE, auth.cookie())
        .json(&book_body("Title", 6))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_RATING");
}

#[tokio::test]
async fn should_require_auth_for_tag_creation() {
    let resp = server().post("/tags").json(&json!({ "name": "essay" })).await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_blank_tag_name() {
    let auth = MockAuth::new(Uuid::now_v7());
    let resp = server()
        .post("/tags")
        .add_header(COOKIE, auth.cookie())
        .json(&json!({ "name": "  " }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_TAG_NAME");
}

#[tokio::test]
async fn should_accept_bearer_token_for_writes() {
    let auth = MockAuth::new(Uuid::now_v7());
    let resp = server()
        .post("/books")
        .add_header(AUTHORIZATION, auth.bearer())
        .json(&book_body("", 4))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_TITLE");
}

#[tokio::test]
async fn should_report_missing_text_fields_by_field() {
    let auth = MockAuth::new(Uuid::now_v7());
    let server = server();

    let mut body = book_body("Title", 4);
    body.as_object_mut().unwrap().remove("title");
    let resp = server
        .post("/books")
        .add_header(COOKIE, auth.cookie())
        .json(&body)
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_TITLE");

    let mut body = book_body("Title", 4);
    body.as_object_mut().unwrap().remove("content");
    let resp = server
        .post("/books")
        .add_header(COOKIE, auth.cookie())
        .json(&body)
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_CONTENT");
}

#[tokio::test]
async fn should_reject_oversized_rating_as_invalid_rating() {
    let auth = MockAuth::new(Uuid::now_v7());
    let mut body = book_body("Title", 4);
    body["rating"] = json!(40000);
    let resp = server()
        .post("/books")
        .add_header(COOKIE, auth.cookie())
        .json(&body)
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_RATING");
}

#[tokio::test]
async fn should_render_unparseable_body_as_invalid_request() {
    let auth = MockAuth::new(Uuid::now_v7());
    let server = server();

    let mut body = book_body("Title", 4);
    body.as_object_mut().unwrap().remove("read_date");
    let resp = server
        .post("/books")
        .add_header(COOKIE, auth.cookie())
        .json(&body)
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_REQUEST");

    let resp = server
        .post("/tags")
        .add_header(COOKIE, auth.cookie())
        .text("essay")
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_REQUEST");
}

#[tokio::test]
async fn should_render_malformed_book_id_as_invalid_request() {
    let auth = MockAuth::new(Uuid::now_v7());
    let server = server();

    let resp = server.get("/books/not-a-uuid").await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body = resp.json::<Value>();
    assert_eq!(body["kind"], "INVALID_REQUEST");
    assert!(body["message"].as_str().unwrap().starts_with("invalid request"));

    let resp = server
        .delete("/books/not-a-uuid")
        .add_header(COOKIE, auth.cookie())
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_REQUEST");
}

#[tokio::test]
async fn should_treat_missing_tag_name_as_invalid_tag_name() {
    let auth = MockAuth::new(Uuid::now_v7());
    let resp = server()
        .post("/tags")
        .add_header(COOKIE, auth.cookie())
        .json(&json!({}))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_TAG_NAME");
}
