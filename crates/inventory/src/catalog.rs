//! Catalog loading: the initial (name, quantity) pairs that seed the store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderflow_core::DomainError;

/// One raw catalog record, as supplied by a loader.
///
/// Names are validated when the store is built, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub quantity: u64,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// Supplier of the initial item set.
pub trait CatalogSource {
    fn load(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
}

/// Catalog held in memory (tests, embedded defaults).
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }
}

impl<N: Into<String>> FromIterator<(N, u64)> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = (N, u64)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, quantity)| CatalogEntry::new(name, quantity))
                .collect(),
        )
    }
}

impl CatalogSource for StaticCatalog {
    fn load(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(self.entries.clone())
    }
}

/// Catalog stored as a JSON array of `{"name": .., "quantity": ..}` objects.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse catalog JSON without touching the filesystem.
    pub fn parse(json: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let entries = Self::parse(&raw)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "catalog file read");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_catalog() {
        let entries =
            JsonFileCatalog::parse(r#"[{"name":"widget","quantity":10},{"name":"gadget","quantity":0}]"#)
                .unwrap();
        assert_eq!(
            entries,
            vec![CatalogEntry::new("widget", 10), CatalogEntry::new("gadget", 0)]
        );
    }

    #[test]
    fn negative_quantity_is_malformed() {
        let err = JsonFileCatalog::parse(r#"[{"name":"widget","quantity":-1}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("orderflow-catalog-does-not-exist.json");
        let err = JsonFileCatalog::new(&path).load().unwrap_err();
        match err {
            CatalogError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn loads_catalog_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "orderflow-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"[{"name":"bolt","quantity":3}]"#).unwrap();

        let entries = JsonFileCatalog::new(&path).load().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(entries, vec![CatalogEntry::new("bolt", 3)]);
    }

    #[test]
    fn static_catalog_from_pairs() {
        let catalog: StaticCatalog = [("widget", 10), ("gadget", 2)].into_iter().collect();
        assert_eq!(catalog.load().unwrap().len(), 2);
    }
}
