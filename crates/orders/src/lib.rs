//! Order ingestion: validate a request, reserve stock, record the outcome.
//!
//! Every validated request ends up as an immutable [`Order`] in the
//! append-only [`OrderLog`], accepted or not. Malformed requests are refused
//! with [`IngestError::InvalidOrder`] and leave no trace besides a counter.

pub mod ingestor;
pub mod log;
pub mod order;
pub mod stats;

pub use ingestor::{IngestError, OrderIngestor, OrderRecordedBus};
pub use log::{AuditExportError, AuditIter, OrderLog};
pub use order::{Order, OrderRecorded, OrderRequest, OrderStatus, ValidOrder};
pub use stats::IngestStats;
