use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use orderflow_core::ItemName;
use orderflow_inventory::Item;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/:name", get(get_item))
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(services.ingestor().inventory().items())
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(raw): Path<String>,
) -> axum::response::Response {
    // Same normalization as order item names, so " widget" finds "widget".
    let Ok(name) = raw.parse::<ItemName>() else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", format!("no item named '{raw}'"));
    };

    match services.ingestor().inventory().quantity(name.as_str()) {
        Some(quantity) => Json(Item { name, quantity }).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", format!("no item named '{name}'")),
    }
}
