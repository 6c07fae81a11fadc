use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::dto::visit_dto::{CreateVisitRequest, UpdateVisitStatusRequest};
use crate::service::visit_service::{VisitService, VisitServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_visit_handler(
    State(service): State<Arc<VisitServiceImpl>>,
    Json(payload): Json<CreateVisitRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }
    let created = service.schedule(payload.into()).await?;
    Ok(Json(created))
}

// Admin only
pub async fn list_visits_handler(
    State(service): State<Arc<VisitServiceImpl>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let page = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let limit = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let visits = service.list(page, limit).await?;
    Ok(Json(visits))
}

// Admin only
pub async fn get_visit_handler(
    State(service): State<Arc<VisitServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid visit id"))?;
    let visit = service.get(id).await?;
    Ok(Json(visit))
}

// Admin only
pub async fn update_visit_status_handler(
    State(service): State<Arc<VisitServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateVisitStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid visit id"))?;
    let updated = service.update_status(id, payload.status).await?;
    Ok(Json(updated))
}
