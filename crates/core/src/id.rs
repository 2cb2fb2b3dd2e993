//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a recorded order.
///
/// Issued by the order log, starting at 1 and strictly increasing in append order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::validation(format!("OrderId: {e}")))
    }
}

/// Name of an inventory item (the item's unique key).
///
/// Always non-empty and free of leading/trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl FromStr for ItemName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_name_is_trimmed() {
        let name = ItemName::parse("  widget ").unwrap();
        assert_eq!(name.as_str(), "widget");
    }

    #[test]
    fn blank_item_name_is_rejected() {
        assert!(matches!(ItemName::parse("   "), Err(DomainError::Validation(_))));
        assert!(matches!(ItemName::parse(""), Err(DomainError::Validation(_))));
    }

    #[test]
    fn item_name_deserialization_validates() {
        let ok: ItemName = serde_json::from_str("\"gadget\"").unwrap();
        assert_eq!(ok.as_str(), "gadget");
        assert!(serde_json::from_str::<ItemName>("\"\"").is_err());
    }

    #[test]
    fn order_ids_are_ordered_and_parse() {
        assert!(OrderId::new(1) < OrderId::new(2));
        assert_eq!("42".parse::<OrderId>().unwrap(), OrderId::new(42));
        assert!("x".parse::<OrderId>().is_err());
    }
}
