use axum::body::to_bytes;
use axum::{body::Body, http::{header, Request, StatusCode}, Router};
use gozamadrid_backend::config::CookieConfig;
use gozamadrid_backend::router::prefs_router::prefs_router;
use gozamadrid_backend::util::cookies::PreferenceStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

fn build_app() -> Router {
    let store = Arc::new(PreferenceStore::new(CookieConfig::default()));
    Router::new().merge(prefs_router(store))
}

#[tokio::test]
async fn test_set_then_get_preference_round_trip() {
    let app = build_app();

    // Store the preference
    let req = Request::builder()
        .method("PUT")
        .uri("/api/prefs/theme")
        .header("content-type", "application/json")
        .body(Body::from(json!("dark").to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("theme="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));

    // Read it back, replaying only the name=value pair
    let pair = set_cookie.split(';').next().unwrap().to_string();
    let req = Request::builder()
        .method("GET")
        .uri("/api/prefs/theme")
        .header(header::COOKIE, pair)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!("dark"));
}

#[tokio::test]
async fn test_get_missing_preference_is_not_found() {
    let app = build_app();

    let req = Request::builder()
        .method("GET")
        .uri("/api/prefs/theme")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_object_preference_round_trip() {
    let app = build_app();
    let original = json!({ "visible": false, "variant": "compact" });

    let req = Request::builder()
        .method("PUT")
        .uri("/api/prefs/navbar")
        .header("content-type", "application/json")
        .body(Body::from(original.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let pair = set_cookie.split(';').next().unwrap().to_string();

    let req = Request::builder()
        .method("GET")
        .uri("/api/prefs/navbar")
        .header(header::COOKIE, pair)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, original);
}

#[tokio::test]
async fn test_remove_preference_expires_cookie() {
    let app = build_app();

    let req = Request::builder()
        .method("DELETE")
        .uri("/api/prefs/theme")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header missing")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("theme="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_plain_string_cookie_still_reads() {
    let app = build_app();

    // A cookie written by an earlier frontend, not JSON-encoded
    let req = Request::builder()
        .method("GET")
        .uri("/api/prefs/lang")
        .header(header::COOKIE, "lang=es")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!("es"));
}
