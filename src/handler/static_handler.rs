use axum::{extract::Query, response::IntoResponse, Json};
use std::collections::HashMap;

use crate::proxy::static_data::{example_posts, example_properties, paginate};

/// Fixed WooCommerce-shaped listings, paginated by page/limit
pub async fn static_properties_handler(
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let page = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let limit = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(10);
    Json(paginate(example_properties(), page, limit))
}

/// Fixed WordPress-shaped posts, paginated by page/limit
pub async fn static_posts_handler(
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let page = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let limit = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(10);
    Json(paginate(example_posts(), page, limit))
}
