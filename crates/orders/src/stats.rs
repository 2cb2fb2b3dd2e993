//! Per-outcome submission counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::order::OrderStatus;

/// Snapshot of the ingestor's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Every call to `submit`, valid or not.
    pub submitted: u64,
    pub accepted: u64,
    pub rejected_insufficient_stock: u64,
    pub rejected_unknown_item: u64,
    /// Refused before touching inventory; never recorded.
    pub invalid: u64,
}

#[derive(Debug, Default)]
pub(crate) struct IngestCounters {
    submitted: AtomicU64,
    accepted: AtomicU64,
    rejected_insufficient_stock: AtomicU64,
    rejected_unknown_item: AtomicU64,
    invalid: AtomicU64,
}

impl IngestCounters {
    pub(crate) fn record(&self, status: OrderStatus) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
        let counter = match status {
            OrderStatus::Accepted => &self.accepted,
            OrderStatus::RejectedInsufficientStock => &self.rejected_insufficient_stock,
            OrderStatus::RejectedUnknownItem => &self.rejected_unknown_item,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_invalid(&self) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
        self.invalid.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> IngestStats {
        IngestStats {
            submitted: self.submitted.load(Ordering::Relaxed),
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected_insufficient_stock: self.rejected_insufficient_stock.load(Ordering::Relaxed),
            rejected_unknown_item: self.rejected_unknown_item.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
        }
    }
}
