//! Order ingestion pipeline.
//!
//! ```text
//! OrderRequest
//!   ↓ validate (InvalidOrder → Err, nothing recorded)
//!   ↓ InventoryStore::try_reserve (per-item critical section)
//!   ↓ OrderLog::append (id issued, record immutable from here)
//!   ↓ publish OrderRecorded (best effort)
//! Order
//! ```

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use orderflow_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};
use orderflow_inventory::InventoryStore;

use crate::log::OrderLog;
use crate::order::{Order, OrderRecorded, OrderRequest, OrderStatus};
use crate::stats::{IngestCounters, IngestStats};

/// Default bus for live order notifications.
pub type OrderRecordedBus = InMemoryEventBus<EventEnvelope<OrderRecorded>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The request was malformed and never reached inventory.
    #[error("invalid order: {0}")]
    InvalidOrder(String),
}

/// Validates orders, reserves stock and records every outcome.
///
/// Shareable across threads (`Arc<OrderIngestor>`); all methods take `&self`.
#[derive(Debug)]
pub struct OrderIngestor<B = OrderRecordedBus> {
    inventory: Arc<InventoryStore>,
    log: Arc<OrderLog>,
    bus: B,
    counters: IngestCounters,
}

impl OrderIngestor<OrderRecordedBus> {
    /// Ingestor with a fresh log and an in-memory notification bus.
    pub fn in_memory(inventory: Arc<InventoryStore>) -> Self {
        Self::new(inventory, Arc::new(OrderLog::new()), OrderRecordedBus::new())
    }
}

impl<B> OrderIngestor<B>
where
    B: EventBus<EventEnvelope<OrderRecorded>>,
{
    pub fn new(inventory: Arc<InventoryStore>, log: Arc<OrderLog>, bus: B) -> Self {
        Self {
            inventory,
            log,
            bus,
            counters: IngestCounters::default(),
        }
    }

    /// Process one order request.
    ///
    /// Returns the recorded order for both accepted and rejected outcomes;
    /// only a malformed request is an `Err`. Stock is decremented before the
    /// order is appended, so an accepted record always has a real reservation
    /// behind it.
    pub fn submit(&self, request: &OrderRequest) -> Result<Order, IngestError> {
        let valid = match request.validate() {
            Ok(valid) => valid,
            Err(err) => {
                self.counters.record_invalid();
                tracing::warn!(item = %request.item_name, number = request.number, "order refused: {err}");
                return Err(err);
            }
        };

        let outcome = self
            .inventory
            .try_reserve(valid.item_name().as_str(), valid.number());
        let status = OrderStatus::from(outcome);

        let order = self.log.append(
            valid.item_name().clone(),
            valid.number().get(),
            status,
            Utc::now(),
        );
        self.counters.record(status);

        if status.is_accepted() {
            tracing::info!(order_id = %order.id, item = %order.item_name, number = order.number, ?outcome, "order accepted");
        } else {
            tracing::warn!(order_id = %order.id, item = %order.item_name, number = order.number, %status, "order rejected");
        }

        let envelope = EventEnvelope::wrap(order.id.get(), OrderRecorded { order: order.clone() });
        if let Err(err) = self.bus.publish(envelope) {
            // The log already holds the order; subscribers can catch up from it.
            tracing::warn!(order_id = %order.id, "failed to publish order notification: {err}");
        }

        Ok(order)
    }

    /// Refuse a request body that could not be decoded into an `OrderRequest`.
    ///
    /// Counted and logged like any other invalid order; nothing is recorded.
    pub fn refuse_malformed(&self, detail: impl core::fmt::Display) -> IngestError {
        self.counters.record_invalid();
        tracing::warn!("order refused: malformed request: {detail}");
        IngestError::InvalidOrder(format!("malformed order: {detail}"))
    }

    /// Live feed of orders recorded after this call.
    pub fn subscribe(&self) -> Subscription<EventEnvelope<OrderRecorded>> {
        self.bus.subscribe()
    }

    pub fn stats(&self) -> IngestStats {
        self.counters.snapshot()
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn log(&self) -> &OrderLog {
        &self.log
    }
}
