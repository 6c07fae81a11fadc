use axum::{Router, routing::{post, get}, middleware};
use crate::handler::prefix_handler::{list_prefixes_handler, create_prefix_handler};
use std::sync::Arc;
use crate::service::prefix_service::PrefixServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

pub fn prefix_router(service: Arc<PrefixServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    // Public catalogue route
    let public = Router::new()
        .route("/api/prefixes", get(list_prefixes_handler));

    // Admin-protected seeding route
    let admin = Router::new()
        .route("/api/prefixes", post(create_prefix_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
