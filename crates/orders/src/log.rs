//! Append-only order log (the audit sink).
//!
//! Ids are issued under the append lock, so id order and log order agree and
//! an id doubles as a resume cursor: "everything after order N".

use std::io::Write;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use thiserror::Error;

use orderflow_core::{ItemName, OrderId};

use crate::order::{Order, OrderStatus};

#[derive(Debug, Error)]
pub enum AuditExportError {
    #[error("failed to serialize order {id}: {source}")]
    Serialize {
        id: OrderId,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write audit record: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory append-only store of recorded orders.
#[derive(Debug, Default)]
pub struct OrderLog {
    entries: RwLock<Vec<Order>>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new order, assigning the next id.
    pub fn append(
        &self,
        item_name: ItemName,
        number: u64,
        status: OrderStatus,
        recorded_at: DateTime<Utc>,
    ) -> Order {
        // Appends are a single push; a poisoned log is still well-formed.
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let order = Order {
            id: OrderId::new(entries.len() as u64 + 1),
            item_name,
            number,
            status,
            recorded_at,
        };
        entries.push(order.clone());
        order
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        let index = usize::try_from(id.get()).ok()?.checked_sub(1)?;
        self.read().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Id of the most recently appended order.
    pub fn last_id(&self) -> Option<OrderId> {
        self.read().last().map(|o| o.id)
    }

    /// Lazily iterate orders with id greater than `after` (all orders for `None`).
    ///
    /// The iterator reads the log one record at a time, so orders appended
    /// while iterating are picked up. Restart from [`AuditIter::cursor`] to
    /// resume where a previous pass stopped.
    pub fn iter_after(&self, after: Option<OrderId>) -> AuditIter<'_> {
        AuditIter {
            log: self,
            next_index: after
                .map(|id| usize::try_from(id.get()).unwrap_or(usize::MAX))
                .unwrap_or(0),
            cursor: after,
        }
    }

    /// At most `limit` orders after `after`, in id order.
    pub fn page(&self, after: Option<OrderId>, limit: usize) -> Vec<Order> {
        self.iter_after(after).take(limit).collect()
    }

    /// Write orders after `after` as JSON lines; returns the last id written.
    pub fn export_jsonl<W: Write>(
        &self,
        mut writer: W,
        after: Option<OrderId>,
    ) -> Result<Option<OrderId>, AuditExportError> {
        let mut iter = self.iter_after(after);
        for order in iter.by_ref() {
            serde_json::to_writer(&mut writer, &order)
                .map_err(|source| AuditExportError::Serialize { id: order.id, source })?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(iter.cursor())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Order>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Lazy, restartable iterator over the order log.
#[derive(Debug)]
pub struct AuditIter<'a> {
    log: &'a OrderLog,
    next_index: usize,
    cursor: Option<OrderId>,
}

impl AuditIter<'_> {
    /// Id of the last order yielded (or the starting cursor if none yet).
    pub fn cursor(&self) -> Option<OrderId> {
        self.cursor
    }
}

impl Iterator for AuditIter<'_> {
    type Item = Order;

    fn next(&mut self) -> Option<Self::Item> {
        let order = self.log.read().get(self.next_index).cloned()?;
        self.next_index += 1;
        self.cursor = Some(order.id);
        Some(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ItemName {
        ItemName::parse(s).unwrap()
    }

    fn log_with(n: usize) -> OrderLog {
        let log = OrderLog::new();
        for i in 0..n {
            log.append(name("widget"), i as u64 + 1, OrderStatus::Accepted, Utc::now());
        }
        log
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let log = log_with(3);
        let ids: Vec<u64> = log.iter_after(None).map(|o| o.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(log.last_id(), Some(OrderId::new(3)));
    }

    #[test]
    fn get_by_id() {
        let log = log_with(2);
        assert_eq!(log.get(OrderId::new(2)).unwrap().number, 2);
        assert!(log.get(OrderId::new(0)).is_none());
        assert!(log.get(OrderId::new(3)).is_none());
    }

    #[test]
    fn iteration_resumes_from_cursor() {
        let log = log_with(5);

        let mut first = log.iter_after(None);
        let seen: Vec<_> = first.by_ref().take(2).collect();
        assert_eq!(seen.len(), 2);
        let cursor = first.cursor();
        assert_eq!(cursor, Some(OrderId::new(2)));

        let rest: Vec<u64> = log.iter_after(cursor).map(|o| o.id.get()).collect();
        assert_eq!(rest, vec![3, 4, 5]);
    }

    #[test]
    fn iterator_observes_later_appends() {
        let log = log_with(1);
        let mut iter = log.iter_after(None);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());

        log.append(name("bolt"), 1, OrderStatus::RejectedUnknownItem, Utc::now());

        assert_eq!(iter.next().map(|o| o.id), Some(OrderId::new(2)));
    }

    #[test]
    fn cursor_past_the_end_yields_nothing() {
        let log = log_with(3);
        assert_eq!(log.iter_after(Some(OrderId::new(u64::MAX))).count(), 0);
        assert!(log.page(Some(OrderId::new(3)), 10).is_empty());
    }

    #[test]
    fn page_respects_limit() {
        let log = log_with(10);
        let page = log.page(Some(OrderId::new(4)), 3);
        let ids: Vec<u64> = page.iter().map(|o| o.id.get()).collect();
        assert_eq!(ids, vec![5, 6, 7]);
    }

    #[test]
    fn export_writes_one_json_line_per_order() {
        let log = log_with(3);
        let mut buf = Vec::new();

        let last = log.export_jsonl(&mut buf, Some(OrderId::new(1))).unwrap();

        assert_eq!(last, Some(OrderId::new(3)));
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let decoded: Order = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(decoded.id, OrderId::new(2));
        assert!(lines[1].contains("\"status\":\"accepted\""));
    }

    #[test]
    fn export_of_empty_tail_keeps_cursor() {
        let log = log_with(2);
        let mut buf = Vec::new();
        let last = log.export_jsonl(&mut buf, Some(OrderId::new(2))).unwrap();
        assert_eq!(last, Some(OrderId::new(2)));
        assert!(buf.is_empty());
    }
}
