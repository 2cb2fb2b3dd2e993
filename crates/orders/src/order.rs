use std::num::NonZeroU64;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderflow_core::{ItemName, OrderId};
use orderflow_events::Event;
use orderflow_inventory::ReserveOutcome;

use crate::ingestor::IngestError;

/// Terminal status of a recorded order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Accepted,
    RejectedInsufficientStock,
    RejectedUnknownItem,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Accepted => "accepted",
            OrderStatus::RejectedInsufficientStock => "rejected_insufficient_stock",
            OrderStatus::RejectedUnknownItem => "rejected_unknown_item",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, OrderStatus::Accepted)
    }
}

impl From<ReserveOutcome> for OrderStatus {
    fn from(outcome: ReserveOutcome) -> Self {
        match outcome {
            ReserveOutcome::Reserved { .. } => OrderStatus::Accepted,
            ReserveOutcome::InsufficientStock { .. } => OrderStatus::RejectedInsufficientStock,
            ReserveOutcome::UnknownItem => OrderStatus::RejectedUnknownItem,
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming order request, as delivered by the request surface.
///
/// `number` is signed on purpose: a non-positive value is a malformed order,
/// not a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub item_name: String,
    pub number: i64,
}

impl OrderRequest {
    pub fn new(item_name: impl Into<String>, number: i64) -> Self {
        Self {
            item_name: item_name.into(),
            number,
        }
    }

    pub fn validate(&self) -> Result<ValidOrder, IngestError> {
        let item_name = ItemName::parse(&self.item_name)
            .map_err(|_| IngestError::InvalidOrder("item_name cannot be empty".to_string()))?;

        let number = u64::try_from(self.number)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or_else(|| {
                IngestError::InvalidOrder(format!("number must be positive (got {})", self.number))
            })?;

        Ok(ValidOrder { item_name, number })
    }
}

/// A request that passed validation and may touch inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrder {
    item_name: ItemName,
    number: NonZeroU64,
}

impl ValidOrder {
    pub fn item_name(&self) -> &ItemName {
        &self.item_name
    }

    pub fn number(&self) -> NonZeroU64 {
        self.number
    }
}

/// Recorded order (immutable, retained for audit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub item_name: ItemName,
    pub number: u64,
    pub status: OrderStatus,
    pub recorded_at: DateTime<Utc>,
}

/// Event: an order was appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecorded {
    pub order: Order,
}

impl Event for OrderRecorded {
    fn event_type(&self) -> &'static str {
        "orders.order.recorded"
    }

    fn version(&self) -> u32 {
        1
    }
}
