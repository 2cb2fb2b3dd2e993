//! Authoritative item quantities with an atomic reserve operation.

use std::collections::HashMap;
use std::num::NonZeroU64;
use std::sync::{Mutex, PoisonError};

use orderflow_core::{DomainError, DomainResult, ItemName};

use crate::catalog::{CatalogEntry, CatalogError, CatalogSource};
use crate::item::Item;

/// Result of a single reservation attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// Stock covered the request and was decremented.
    Reserved { remaining: u64 },
    /// Stock was lower than the request; nothing changed.
    InsufficientStock { available: u64 },
    /// No item with that name; nothing changed.
    UnknownItem,
}

impl ReserveOutcome {
    pub fn is_reserved(&self) -> bool {
        matches!(self, ReserveOutcome::Reserved { .. })
    }
}

/// In-memory inventory keyed by item name.
///
/// The set of items is fixed at construction; only quantities change after
/// that, and only through [`InventoryStore::try_reserve`]. Each item has its
/// own lock, so reservations against different items never contend.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: HashMap<ItemName, Mutex<u64>>,
}

impl InventoryStore {
    /// Build a store from raw catalog entries.
    ///
    /// Fails on a blank name (`Validation`) or a repeated name (`Conflict`).
    pub fn from_catalog(entries: impl IntoIterator<Item = CatalogEntry>) -> DomainResult<Self> {
        let mut items = HashMap::new();
        for entry in entries {
            let name = ItemName::parse(&entry.name)?;
            if items.contains_key(&name) {
                return Err(DomainError::conflict(format!("duplicate item name '{name}'")));
            }
            items.insert(name, Mutex::new(entry.quantity));
        }
        Ok(Self { items })
    }

    /// Load entries from `source` and build the store.
    pub fn load(source: &impl CatalogSource) -> Result<Self, CatalogError> {
        let store = Self::from_catalog(source.load()?)?;
        tracing::info!(items = store.len(), "inventory catalog loaded");
        Ok(store)
    }

    /// Atomically decrement `name` by `amount` if enough stock is present.
    ///
    /// Concurrent calls for the same item are serialized on that item's lock;
    /// the read, the check and the write happen under one acquisition.
    pub fn try_reserve(&self, name: &str, amount: NonZeroU64) -> ReserveOutcome {
        let Some(slot) = self.items.get(name) else {
            tracing::debug!(item = name, amount = amount.get(), "reserve: unknown item");
            return ReserveOutcome::UnknownItem;
        };

        // Nothing between the check and the write can panic, so a poisoned
        // slot still holds a consistent quantity.
        let mut quantity = slot.lock().unwrap_or_else(PoisonError::into_inner);
        let amount = amount.get();

        if *quantity < amount {
            tracing::debug!(item = name, amount, available = *quantity, "reserve: insufficient stock");
            return ReserveOutcome::InsufficientStock { available: *quantity };
        }

        *quantity -= amount;
        tracing::debug!(item = name, amount, remaining = *quantity, "reserve: applied");
        ReserveOutcome::Reserved { remaining: *quantity }
    }

    /// Current quantity of `name`, if the item exists.
    pub fn quantity(&self, name: &str) -> Option<u64> {
        self.items
            .get(name)
            .map(|slot| *slot.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Snapshot of all items, sorted by name.
    ///
    /// Each quantity is read under its own lock; the snapshot as a whole is
    /// not a single consistent cut across items.
    pub fn items(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .map(|(name, slot)| Item {
                name: name.clone(),
                quantity: *slot.lock().unwrap_or_else(PoisonError::into_inner),
            })
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
