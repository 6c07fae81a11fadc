use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::dto::contact_dto::{CreateContactRequest, UpdateContactStatusRequest};
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }
    let created = service.submit(payload.into()).await?;
    Ok(Json(created))
}

// Admin only
pub async fn list_contacts_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let page = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let limit = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let contacts = service.list(page, limit).await?;
    Ok(Json(contacts))
}

// Admin only
pub async fn get_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id)
        .map_err(|_| HandlerError::bad_request("Invalid contact id"))?;
    let contact = service.get(id).await?;
    Ok(Json(contact))
}

// Admin only
pub async fn update_contact_status_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateContactStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id)
        .map_err(|_| HandlerError::bad_request("Invalid contact id"))?;
    let updated = service.update_status(id, payload.status).await?;
    Ok(Json(updated))
}
