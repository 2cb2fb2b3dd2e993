use axum::{Router, routing::get};

pub mod inventory;
pub mod orders;
pub mod system;

/// Router for all service endpoints except `/health`.
pub fn router() -> Router {
    Router::new()
        .route("/stats", get(system::stats))
        .nest("/orders", orders::router())
        .nest("/items", inventory::router())
}
