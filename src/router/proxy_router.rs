use axum::{Router, routing::{any, get}};
use crate::handler::proxy_handler::{proxy_handler, ProxyState};
use crate::handler::static_handler::{static_posts_handler, static_properties_handler};
use std::sync::Arc;

pub fn proxy_router(state: Arc<ProxyState>) -> Router {
    // Relayed routes share one handler; the table in proxy::routes decides
    // upstream and path. Static responders answer locally and never leave
    // the process.
    Router::new()
        .route("/api/auth/register", any(proxy_handler))
        .route("/api/auth/login", any(proxy_handler))
        .route("/api/auth/me", any(proxy_handler))
        .route("/api/properties", any(proxy_handler))
        .route("/api/properties/sources/woocommerce", any(proxy_handler))
        .route("/api/blogs/slugs", any(proxy_handler))
        .route("/api/images/{*path}", any(proxy_handler))
        .route("/api/properties/sources/woocommerce/static", get(static_properties_handler))
        .route("/api/blogs/static", get(static_posts_handler))
        .with_state(state)
}
