use axum::{Router, routing::{post, get, put}, middleware};
use crate::handler::contact_handler::{
    create_contact_handler,
    list_contacts_handler,
    get_contact_handler,
    update_contact_status_handler,
};
use std::sync::Arc;
use crate::service::contact_service::ContactServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

pub fn contact_router(service: Arc<ContactServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    // Public submission route
    let public = Router::new()
        .route("/api/contact", post(create_contact_handler));

    // Admin-protected routes
    let admin = Router::new()
        .route("/api/contact", get(list_contacts_handler))
        .route("/api/contact/{id}", get(get_contact_handler))
        .route("/api/contact/{id}/status", put(update_contact_status_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
