use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, error};

use crate::proxy::client::{ProxyClient, ProxyErrorBody};
use crate::proxy::routes::{self, PayloadKind};

/// 2 MB cap on inbound bodies; form payloads are far smaller
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub struct ProxyState {
    pub client: ProxyClient,
}

/// Uniform entry point for every proxied route: resolve against the table,
/// forward once, relay whatever came back.
pub async fn proxy_handler(State(state): State<Arc<ProxyState>>, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let raw_query = req.uri().query().unwrap_or("").to_string();
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let Some(route) = routes::resolve(&path, &raw_query) else {
        debug!("No proxy route for {}", path);
        return (
            StatusCode::NOT_FOUND,
            Json(ProxyErrorBody::new("Unknown API route", path)),
        )
            .into_response();
    };

    let body = match axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read request body: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProxyErrorBody::new("Failed to read request body", e.to_string())),
            )
                .into_response();
        }
    };

    match state
        .client
        .forward(method.as_str(), &route, authorization.as_deref(), Some(body))
        .await
    {
        Ok(upstream) => {
            let status =
                StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let content_type = upstream.content_type.unwrap_or_else(|| {
                match route.payload {
                    PayloadKind::Json => "application/json".to_string(),
                    PayloadKind::Binary => "application/octet-stream".to_string(),
                }
            });
            Response::builder()
                .status(status)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(upstream.body))
                .unwrap_or_else(|e| {
                    error!("Failed to build relay response: {}", e);
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                })
        }
        Err(e) => {
            error!("Proxy forward failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProxyErrorBody::new("Proxy failure", e.to_string())),
            )
                .into_response()
        }
    }
}
