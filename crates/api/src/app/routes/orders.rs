use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use orderflow_core::OrderId;
use orderflow_orders::OrderRequest;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(submit_order))
        .route("/:id", get(get_order))
}

/// Ingest one order.
///
/// Recorded orders answer `201` whatever their status; only a malformed
/// request (undecodable body, blank name, non-positive number) is a `400`.
pub async fn submit_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = services.ingestor().refuse_malformed(rejection.body_text());
            return errors::ingest_error_to_response(err);
        }
    };

    match services.ingestor().submit(&body) {
        Ok(order) => (StatusCode::CREATED, Json(order)).into_response(),
        Err(e) => errors::ingest_error_to_response(e),
    }
}

/// Page through the audit feed in id order.
pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::OrderFeedQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_query", rejection.body_text());
        }
    };

    let limit = query
        .limit
        .unwrap_or(services.feed_page_limit())
        .clamp(1, services.feed_page_limit());
    let after = query.after.map(OrderId::new);

    let orders = services.ingestor().log().page(after, limit);
    let next_cursor = orders.last().map(|o| o.id).or(after);

    Json(dto::OrderFeedPage { orders, next_cursor }).into_response()
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id"),
    };

    match services.ingestor().log().get(id) {
        Some(order) => Json(order).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", format!("no order with id {id}")),
    }
}
