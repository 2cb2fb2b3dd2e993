//! Environment-driven service configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_VAR: &str = "ORDERFLOW_BIND";
pub const CATALOG_VAR: &str = "ORDERFLOW_CATALOG";
pub const FEED_PAGE_LIMIT_VAR: &str = "ORDERFLOW_FEED_PAGE_LIMIT";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_FEED_PAGE_LIMIT: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// JSON catalog to seed inventory from; `None` starts with no items.
    pub catalog_path: Option<PathBuf>,
    /// Upper bound on the page size of the order feed.
    pub feed_page_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            catalog_path: None,
            feed_page_limit: DEFAULT_FEED_PAGE_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup (empty values count as unset).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = get(BIND_VAR)
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_VAR,
                message: e.to_string(),
            })?;

        let catalog_path = get(CATALOG_VAR).map(PathBuf::from);

        let feed_page_limit = match get(FEED_PAGE_LIMIT_VAR) {
            None => DEFAULT_FEED_PAGE_LIMIT,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        var: FEED_PAGE_LIMIT_VAR,
                        message: "must be greater than zero".to_string(),
                    });
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: FEED_PAGE_LIMIT_VAR,
                        message: e.to_string(),
                    });
                }
            },
        };

        Ok(Self {
            bind_addr,
            catalog_path,
            feed_page_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(from_pairs(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = from_pairs(&[
            (BIND_VAR, "127.0.0.1:9000"),
            (CATALOG_VAR, "/etc/orderflow/catalog.json"),
            (FEED_PAGE_LIMIT_VAR, "25"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/orderflow/catalog.json")));
        assert_eq!(config.feed_page_limit, 25);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = from_pairs(&[(BIND_VAR, " "), (CATALOG_VAR, "")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            from_pairs(&[(BIND_VAR, "not-an-addr")]),
            Err(ConfigError::Invalid { var: BIND_VAR, .. })
        ));
        assert!(matches!(
            from_pairs(&[(FEED_PAGE_LIMIT_VAR, "0")]),
            Err(ConfigError::Invalid { var: FEED_PAGE_LIMIT_VAR, .. })
        ));
        assert!(matches!(
            from_pairs(&[(FEED_PAGE_LIMIT_VAR, "lots")]),
            Err(ConfigError::Invalid { var: FEED_PAGE_LIMIT_VAR, .. })
        ));
    }
}
