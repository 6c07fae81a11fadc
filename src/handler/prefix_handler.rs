use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::prefix_dto::CreatePrefixRequest;
use crate::service::prefix_service::{PrefixService, PrefixServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_prefixes_handler(
    State(service): State<Arc<PrefixServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let prefixes = service.list_all().await?;
    Ok(Json(prefixes))
}

// Admin only
pub async fn create_prefix_handler(
    State(service): State<Arc<PrefixServiceImpl>>,
    Json(payload): Json<CreatePrefixRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }
    let created = service.create(payload.into()).await?;
    Ok(Json(created))
}
