use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orderflow_orders::IngestError;

pub fn ingest_error_to_response(err: IngestError) -> axum::response::Response {
    match err {
        IngestError::InvalidOrder(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_order", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
