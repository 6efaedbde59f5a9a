//! Error handling module for trade-values
//!
//! Value resolution itself never fails. These errors cover the layers around
//! it: parsing catalogs and valuing trade offers. File access goes through
//! `anyhow` at the loader boundary.

use thiserror::Error;

/// Main error type for trade-values
#[derive(Error, Debug)]
pub enum TradeValueError {
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog shape errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Validation errors (trade entries, CLI input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup by id or name found nothing
    #[error("Item not found: {0}")]
    ItemNotFound(String),
}

/// Result type alias for trade-values operations
pub type Result<T> = std::result::Result<T, TradeValueError>;

impl TradeValueError {
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn item_not_found(query: impl Into<String>) -> Self {
        Self::ItemNotFound(query.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TradeValueError::validation("quantity for owl must be at least 1");
        assert_eq!(err.to_string(), "Validation error: quantity for owl must be at least 1");

        let err = TradeValueError::item_not_found("Frost Dragon");
        assert_eq!(err.to_string(), "Item not found: Frost Dragon");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TradeValueError = json_err.into();
        assert!(matches!(err, TradeValueError::Json(_)));
    }
}
