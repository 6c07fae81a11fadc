use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::dto::offer_dto::{CreateOfferRequest, UpdateOfferStatusRequest};
use crate::service::offer_service::{OfferService, OfferServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_offer_handler(
    State(service): State<Arc<OfferServiceImpl>>,
    Json(payload): Json<CreateOfferRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }
    let created = service.submit(payload.into()).await?;
    Ok(Json(created))
}

// Admin only
pub async fn list_offers_handler(
    State(service): State<Arc<OfferServiceImpl>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let page = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let limit = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let offers = service.list(page, limit).await?;
    Ok(Json(offers))
}

// Admin only
pub async fn get_offer_handler(
    State(service): State<Arc<OfferServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid offer id"))?;
    let offer = service.get(id).await?;
    Ok(Json(offer))
}

// Admin only
pub async fn update_offer_status_handler(
    State(service): State<Arc<OfferServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOfferStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid offer id"))?;
    let updated = service.update_status(id, payload.status).await?;
    Ok(Json(updated))
}
