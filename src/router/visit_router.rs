use axum::{Router, routing::{post, get, put}, middleware};
use crate::handler::visit_handler::{
    create_visit_handler,
    list_visits_handler,
    get_visit_handler,
    update_visit_status_handler,
};
use std::sync::Arc;
use crate::service::visit_service::VisitServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

pub fn visit_router(service: Arc<VisitServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    // Public submission route
    let public = Router::new()
        .route("/api/property-visit", post(create_visit_handler));

    // Admin-protected routes
    let admin = Router::new()
        .route("/api/property-visit", get(list_visits_handler))
        .route("/api/property-visit/{id}", get(get_visit_handler))
        .route("/api/property-visit/{id}/status", put(update_visit_status_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
