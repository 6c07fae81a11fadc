use axum::body::to_bytes;
use axum::{body::Body, http::{Request, StatusCode}, middleware, Router};
use gozamadrid_backend::config::UpstreamConfig;
use gozamadrid_backend::handler::proxy_handler::ProxyState;
use gozamadrid_backend::middlewares::cors_middleware::cors;
use gozamadrid_backend::proxy::client::ProxyClient;
use gozamadrid_backend::router::proxy_router::proxy_router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

fn build_app() -> Router {
    let client = ProxyClient::new(UpstreamConfig::from_test_env()).expect("proxy client");
    let state = Arc::new(ProxyState { client });
    Router::new()
        .merge(proxy_router(state))
        .layer(middleware::from_fn(cors))
}

#[tokio::test]
async fn test_static_properties_default_page() {
    let app = build_app();

    let req = Request::builder()
        .method("GET")
        .uri("/api/properties/sources/woocommerce/static")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let items: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(items.len(), 3);
    assert!(items[0].get("name").is_some());
    assert!(items[0].get("price").is_some());
}

#[tokio::test]
async fn test_static_properties_pagination() {
    let app = build_app();

    let req = Request::builder()
        .method("GET")
        .uri("/api/properties/sources/woocommerce/static?page=2&limit=1")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let page_two: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(page_two.len(), 1);

    // Must be the second item of the full listing
    let req = Request::builder()
        .method("GET")
        .uri("/api/properties/sources/woocommerce/static")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let all: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(page_two[0], all[1]);
}

#[tokio::test]
async fn test_static_posts_shape() {
    let app = build_app();

    let req = Request::builder()
        .method("GET")
        .uri("/api/blogs/static")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let posts: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts[0].pointer("/title/rendered").is_some());
    assert!(posts[0].get("slug").is_some());
}

#[tokio::test]
async fn test_cors_preflight_short_circuits() {
    let app = build_app();

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/blogs/static")
        .header("origin", "https://realestategozamadrid.com")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert!(resp.headers().contains_key("access-control-allow-methods"));
    assert!(resp.headers().contains_key("access-control-allow-headers"));

    // Preflight responses carry no body
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_cors_headers_on_normal_responses() {
    let app = build_app();

    let req = Request::builder()
        .method("GET")
        .uri("/api/blogs/static")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
