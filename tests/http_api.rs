//! End-to-end tests over the full router with in-memory stores.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use notebox::auth::repository::MemoryUserStore;
use notebox::auth::{AuthService, TokenIssuer};
use notebox::config::CorsConfig;
use notebox::gateway::{self, state::AppState};
use notebox::notes::NoteService;
use notebox::notes::repository::MemoryNoteStore;

const ALLOWED_ORIGIN: &str = "http://localhost:3000";

fn test_app() -> Router {
    let auth = Arc::new(AuthService::new(
        Arc::new(MemoryUserStore::new()),
        TokenIssuer::new("test-secret", 900),
    ));
    let notes = Arc::new(NoteService::new(Arc::new(MemoryNoteStore::new())));
    let cors = CorsConfig {
        allowed_origins: vec![ALLOWED_ORIGIN.to_string()],
    };
    gateway::build_router(Arc::new(AppState::new(auth, notes)), &cors)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn signup_and_login(app: &Router, username: &str, password: &str) -> String {
    let (status, _) = send(
        app,
        json_request(
            "POST",
            "/signup",
            None,
            json!({"username": username, "password": password}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/login",
            None,
            json!({"username": username, "password": password}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_signup_login_create_list_flow() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/signup",
            None,
            json!({"username": "alice", "password": "pw123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created");
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"]["id"].is_i64());
    // The profile never carries the password or its hash.
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            None,
            json!({"username": "alice", "password": "pw123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/notes",
            Some(&token),
            json!({"title": "A", "content": "B"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "A");
    assert_eq!(created["content"], "B");
    let note_id = created["id"].as_str().unwrap().to_string();
    assert!(!note_id.is_empty());

    let (status, listed) = send(&app, get_request("/notes", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let notes = listed.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["id"], note_id.as_str());
    assert_eq!(notes[0]["title"], "A");

    // Same request without a token: credential required.
    let (status, _) = send(&app, get_request("/notes", None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let app = test_app();
    signup_and_login(&app, "alice", "pw123").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/signup",
            None,
            json!({"username": "alice", "password": "other"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_login_failures_share_one_shape() {
    let app = test_app();
    signup_and_login(&app, "alice", "pw123").await;

    let wrong_password = send(
        &app,
        json_request(
            "POST",
            "/login",
            None,
            json!({"username": "alice", "password": "nope"}),
        ),
    )
    .await;
    let unknown_user = send(
        &app,
        json_request(
            "POST",
            "/login",
            None,
            json!({"username": "mallory", "password": "pw123"}),
        ),
    )
    .await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.1, unknown_user.1);
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let app = test_app();

    let (status, _) = send(&app, get_request("/notes", Some("garbage.token.here"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A token signed with a different secret is rejected the same way.
    let foreign = TokenIssuer::new("other-secret", 900)
        .issue(1, "alice")
        .unwrap();
    let (status, _) = send(&app, get_request("/notes", Some(&foreign))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_header_is_forbidden() {
    let app = test_app();

    let req = Request::builder()
        .method("GET")
        .uri("/notes")
        .header(header::AUTHORIZATION, "Basic abc123")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cross_user_access_is_not_found() {
    let app = test_app();
    let alice = signup_and_login(&app, "alice", "pw123").await;
    let bob = signup_and_login(&app, "bob", "pw456").await;

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/notes",
            Some(&alice),
            json!({"title": "t", "content": "c"}),
        ),
    )
    .await;
    let note_id = created["id"].as_str().unwrap();

    // Bob sees nothing of Alice's.
    let (status, listed) = send(&app, get_request("/notes", Some(&bob))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().unwrap().is_empty());

    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            &format!("/notes/{}", note_id),
            Some(&bob),
            json!({"title": "stolen"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        json_request("DELETE", &format!("/notes/{}", note_id), Some(&bob), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Alice's note is untouched.
    let (_, listed) = send(&app, get_request("/notes", Some(&alice))).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["title"], "t");
}

#[tokio::test]
async fn test_partial_update_keeps_content() {
    let app = test_app();
    let token = signup_and_login(&app, "alice", "pw123").await;

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/notes",
            Some(&token),
            json!({"title": "t", "content": "c"}),
        ),
    )
    .await;
    let note_id = created["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/notes/{}", note_id),
            Some(&token),
            json!({"title": "t2"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "t2");
    assert_eq!(updated["content"], "c");
}

#[tokio::test]
async fn test_double_delete_reports_not_found() {
    let app = test_app();
    let token = signup_and_login(&app, "alice", "pw123").await;

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/notes",
            Some(&token),
            json!({"title": "t", "content": "c"}),
        ),
    )
    .await;
    let note_id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        json_request("DELETE", &format!("/notes/{}", note_id), Some(&token), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Note deleted");

    let (status, _) = send(
        &app,
        json_request("DELETE", &format!("/notes/{}", note_id), Some(&token), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_note_rejects_empty_fields() {
    let app = test_app();
    let token = signup_and_login(&app, "alice", "pw123").await;

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/notes",
            Some(&token),
            json!({"title": "", "content": "c"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/notes",
            Some(&token),
            json!({"title": "t", "content": ""}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_preflight_allow_list() {
    let app = test_app();

    let preflight = |origin: &str| {
        Request::builder()
            .method("OPTIONS")
            .uri("/notes")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
            .body(Body::empty())
            .unwrap()
    };

    let resp = app.clone().oneshot(preflight(ALLOWED_ORIGIN)).await.unwrap();
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some(ALLOWED_ORIGIN)
    );
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .map(|v| v.to_str().unwrap()),
        Some("true")
    );

    let resp = app
        .clone()
        .oneshot(preflight("https://evil.example.com"))
        .await
        .unwrap();
    assert!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none(),
        "disallowed origin must not be reflected"
    );
}

#[tokio::test]
async fn test_health_is_public() {
    let app = test_app();
    let (status, body) = send(&app, get_request("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
