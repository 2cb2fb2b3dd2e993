use serde::{Deserialize, Serialize};

use orderflow_core::ItemName;

/// Point-in-time view of an inventory item.
///
/// The live quantity is owned by `InventoryStore`; values of this type are
/// snapshots handed out to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: ItemName,
    pub quantity: u64,
}

