//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Failure to build a domain value or seed domain state.
///
/// Per-order outcomes (unknown item, insufficient stock) are not errors and
/// never show up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a blank item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A unique key was supplied twice.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_detail() {
        assert_eq!(
            DomainError::validation("item name cannot be empty").to_string(),
            "validation failed: item name cannot be empty"
        );
        assert_eq!(
            DomainError::conflict("duplicate item name 'widget'").to_string(),
            "conflict: duplicate item name 'widget'"
        );
    }
}
