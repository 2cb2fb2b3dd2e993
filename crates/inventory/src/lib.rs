//! Inventory domain module.
//!
//! Authoritative item quantities plus the single mutation the domain allows:
//! an atomic check-and-decrement (`InventoryStore::try_reserve`).

pub mod catalog;
pub mod item;
pub mod store;

pub use catalog::{CatalogEntry, CatalogError, CatalogSource, JsonFileCatalog, StaticCatalog};
pub use item::Item;
pub use store::{InventoryStore, ReserveOutcome};
