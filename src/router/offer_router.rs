use axum::{Router, routing::{post, get, put}, middleware};
use crate::handler::offer_handler::{
    create_offer_handler,
    list_offers_handler,
    get_offer_handler,
    update_offer_status_handler,
};
use std::sync::Arc;
use crate::service::offer_service::OfferServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

pub fn offer_router(service: Arc<OfferServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    // Public submission route
    let public = Router::new()
        .route("/api/property-offer", post(create_offer_handler));

    // Admin-protected routes
    let admin = Router::new()
        .route("/api/property-offer", get(list_offers_handler))
        .route("/api/property-offer/{id}", get(get_offer_handler))
        .route("/api/property-offer/{id}/status", put(update_offer_status_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
