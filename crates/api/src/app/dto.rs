use serde::{Deserialize, Serialize};

use orderflow_core::OrderId;
use orderflow_orders::Order;

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /orders`.
#[derive(Debug, Default, Deserialize)]
pub struct OrderFeedQuery {
    /// Return orders with id strictly greater than this.
    pub after: Option<u64>,
    pub limit: Option<usize>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct OrderFeedPage {
    pub orders: Vec<Order>,
    /// Pass back as `after` to continue; unchanged when the page is empty.
    pub next_cursor: Option<OrderId>,
}
