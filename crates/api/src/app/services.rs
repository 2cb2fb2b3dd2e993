use std::sync::Arc;

use orderflow_inventory::{CatalogError, InventoryStore, JsonFileCatalog};
use orderflow_orders::OrderIngestor;

use crate::config::Config;

/// Shared state behind every handler.
#[derive(Debug)]
pub struct AppServices {
    ingestor: OrderIngestor,
    feed_page_limit: usize,
}

impl AppServices {
    pub fn new(inventory: InventoryStore, feed_page_limit: usize) -> Self {
        Self {
            ingestor: OrderIngestor::in_memory(Arc::new(inventory)),
            feed_page_limit: feed_page_limit.max(1),
        }
    }

    /// Seed inventory from the configured catalog (empty when none is set).
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let inventory = match &config.catalog_path {
            Some(path) => InventoryStore::load(&JsonFileCatalog::new(path))?,
            None => {
                tracing::warn!("no catalog configured; starting with empty inventory");
                InventoryStore::default()
            }
        };
        Ok(Self::new(inventory, config.feed_page_limit))
    }

    pub fn ingestor(&self) -> &OrderIngestor {
        &self.ingestor
    }

    pub fn feed_page_limit(&self) -> usize {
        self.feed_page_limit
    }
}
