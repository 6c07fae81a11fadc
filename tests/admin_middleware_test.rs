use axum::{body::Body, http::{Request, StatusCode}, middleware, routing::get, Router};
use gozamadrid_backend::config::JwtConfig;
use gozamadrid_backend::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use gozamadrid_backend::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

fn build_app() -> (Router, Arc<JwtTokenUtilsImpl>) {
    let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(JwtConfig::default()));
    let admin_auth_state = Arc::new(AdminAuthState {
        jwt_utils: jwt_utils.clone(),
    });
    let app = Router::new()
        .route("/admin/ping", get(|| async { "pong" }))
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));
    (app, jwt_utils)
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (app, _) = build_app();

    let req = Request::builder()
        .method("GET")
        .uri("/admin/ping")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_token_is_unauthorized() {
    let (app, _) = build_app();

    let req = Request::builder()
        .method("GET")
        .uri("/admin/ping")
        .header("authorization", "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_role_is_forbidden() {
    let (app, jwt_utils) = build_app();

    let token = jwt_utils
        .generate_access_token("user123", "user@example.com", "USER")
        .expect("token generation failed");
    let req = Request::builder()
        .method("GET")
        .uri("/admin/ping")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_role_passes_through() {
    let (app, jwt_utils) = build_app();

    let token = jwt_utils
        .generate_access_token("admin123", "admin@example.com", "ADMIN")
        .expect("token generation failed");
    let req = Request::builder()
        .method("GET")
        .uri("/admin/ping")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_token_is_rejected_as_credential() {
    let (app, jwt_utils) = build_app();

    // Only access tokens open admin routes
    let token = jwt_utils
        .generate_refresh_token("admin123", "admin@example.com", "ADMIN")
        .expect("token generation failed");
    let req = Request::builder()
        .method("GET")
        .uri("/admin/ping")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
