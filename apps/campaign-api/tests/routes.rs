//! Router tests driven in-process

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tower::ServiceExt;

use campaign_api::fixtures::FixtureStore;
use campaign_api::{create_router, AppState};

const SECRET: &str = "test-secret";

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn app_with(dir: &Path, secret: Option<&str>, dev_mode: bool) -> Router {
    let store = FixtureStore::new(dir, Duration::from_secs(300));
    create_router(AppState::new(store, secret.map(String::from), dev_mode))
}

fn app() -> Router {
    app_with(&fixtures_dir(), Some(SECRET), false)
}

async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_authed(uri: &str) -> (StatusCode, Value) {
    get(app(), uri, Some(SECRET)).await
}

#[tokio::test]
async fn health_is_public() {
    let (status, body) = get(app(), "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["authEnabled"], true);
}

#[tokio::test]
async fn protected_routes_need_the_secret() {
    for uri in ["/api/contacts", "/api/lists", "/api/campaigns", "/api/files"] {
        let (status, body) = get(app(), uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["error"], "Unauthorized");

        let (status, _) = get(app(), uri, Some("wrong")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let request = Request::builder()
        .uri("/api/contacts")
        .header(header::AUTHORIZATION, SECRET)
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_secret_outside_dev_mode_is_server_error() {
    let app = app_with(&fixtures_dir(), None, false);
    let (status, body) = get(app, "/api/contacts", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "API secret not configured");
}

#[tokio::test]
async fn dev_mode_without_secret_skips_auth() {
    let app = app_with(&fixtures_dir(), None, true);
    let (status, body) = get(app, "/api/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn dev_mode_with_secret_still_checks_it() {
    let app = app_with(&fixtures_dir(), Some(SECRET), true);
    let (status, _) = get(app, "/api/contacts", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn contacts_and_views() {
    let (status, body) = get_authed("/api/contacts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["firstName"], "Ada");

    let (status, body) = get_authed("/api/contacts?view=recent").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["firstName"], "Grace");

    let (status, _) = get_authed("/api/contacts?view=archived").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contacts_view_cannot_escape_fixture_dir() {
    let (status, body) = get_authed("/api/contacts?view=..%2F..%2Fetc%2Fpasswd").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid fixture name"));
}

#[tokio::test]
async fn lists_headers_and_lookup() {
    let (_, body) = get_authed("/api/lists").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = get_authed("/api/lists?loadheaders=true").await;
    assert_eq!(body[0]["key"], "name");

    let (_, body) = get_authed("/api/lists?loadheaders=false").await;
    assert_eq!(body[0]["name"], "Newsletter");

    let (status, body) = get_authed("/api/lists?listid=101").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Newsletter");

    let (status, body) = get_authed("/api/lists?listid=vip").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "VIP Customers");

    let (status, body) = get_authed("/api/lists?listid=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "List 999 not found" }));
}

#[tokio::test]
async fn campaigns_and_lookup() {
    let (status, body) = get_authed("/api/campaigns").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = get_authed("/api/campaigns?campaignid=2").await;
    assert_eq!(body["name"], "VIP Preview");

    let (status, body) = get_authed("/api/campaigns?campaignid=42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Campaign 42 not found");
}

#[tokio::test]
async fn files_filter_by_folder_and_type() {
    let names = |body: &Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap().to_string())
            .collect()
    };

    let (_, body) = get_authed("/api/files").await;
    assert_eq!(names(&body), ["hero.png", "terms.pdf", "logo.svg"]);

    let (_, body) = get_authed("/api/files?folderid=1").await;
    assert_eq!(names(&body), ["hero.png", "terms.pdf"]);

    let (_, body) = get_authed("/api/files?type=image").await;
    assert_eq!(names(&body), ["hero.png", "logo.svg"]);

    let (_, body) = get_authed("/api/files?folderid=2&type=image").await;
    assert_eq!(names(&body), ["logo.svg"]);

    let (_, body) = get_authed("/api/files?folderid=3").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn malformed_fixture_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("campaigns.json"), "not json").unwrap();
    std::fs::write(dir.path().join("files.json"), r#"{ "id": "f1" }"#).unwrap();

    let app = app_with(dir.path(), Some(SECRET), false);
    let (status, body) = get(app.clone(), "/api/campaigns", Some(SECRET)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("campaigns.json"));

    let (status, body) = get(app, "/api/files", Some(SECRET)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Fixture files.json is not an array");
}

#[tokio::test]
async fn lookup_in_non_array_fixture_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lists.json"), r#"{ "id": 101 }"#).unwrap();
    std::fs::write(dir.path().join("campaigns.json"), r#"{ "id": 7 }"#).unwrap();

    let app = app_with(dir.path(), Some(SECRET), false);
    let (status, body) = get(app.clone(), "/api/lists?listid=101", Some(SECRET)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Fixture lists.json is not an array");

    let (status, body) = get(app, "/api/campaigns?campaignid=7", Some(SECRET)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Fixture campaigns.json is not an array");
}

#[tokio::test]
async fn fixtures_are_cached_between_requests() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("contacts.json"), r#"[{ "id": 1 }]"#).unwrap();

    let app = app_with(dir.path(), Some(SECRET), false);
    let (_, first) = get(app.clone(), "/api/contacts", Some(SECRET)).await;

    std::fs::write(dir.path().join("contacts.json"), "[]").unwrap();
    let (_, second) = get(app.clone(), "/api/contacts", Some(SECRET)).await;
    assert_eq!(first, second);

    let (_, health) = get(app, "/api/health", None).await;
    assert_eq!(health["cachedFixtures"], 1);
}
