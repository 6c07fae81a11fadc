use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::util::cookies::PreferenceStore;
use crate::util::error::{HandlerError, HandlerErrorKind};

pub async fn get_pref_handler(
    State(store): State<Arc<PreferenceStore>>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HandlerError> {
    let cookie_header = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    match store.read(cookie_header, &key) {
        Some(value) => Ok(Json(value)),
        None => Err(HandlerError {
            error: HandlerErrorKind::NotFound,
            message: format!("No preference stored under '{}'", key),
            details: None,
        }),
    }
}

pub async fn set_pref_handler(
    State(store): State<Arc<PreferenceStore>>,
    Path(key): Path<String>,
    Json(value): Json<Value>,
) -> impl IntoResponse {
    let cookie = store.build(&key, &value);
    (
        [(header::SET_COOKIE, cookie.encoded().to_string())],
        Json(value),
    )
}

pub async fn remove_pref_handler(
    State(store): State<Arc<PreferenceStore>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let cookie = store.removal(&key);
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, cookie.encoded().to_string())],
    )
}
