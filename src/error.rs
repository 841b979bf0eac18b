//! Error types for catalog construction and selection.

use thiserror::Error;

/// Errors raised while building a catalog or running a selector.
///
/// Every variant is fatal to the call that produced it. Selectors never
/// return partial solutions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    /// An item failed validation during catalog construction.
    #[error("invalid item `{name}`: {reason}")]
    InvalidItem {
        /// Name of the offending item.
        name: String,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// The budget passed to a selector was negative.
    #[error("invalid budget {0}: must be non-negative")]
    InvalidBudget(i64),

    /// The exact solver's table would exceed the configured cell limit.
    #[error("dp table of {rows} x {cols} cells exceeds the limit of {limit} cells")]
    TableTooLarge {
        /// Number of table rows (`n + 1`).
        rows: usize,
        /// Number of table columns (`budget + 1`).
        cols: usize,
        /// Configured maximum number of cells.
        limit: usize,
    },

    /// A configuration object failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SelectError {
    pub(crate) fn invalid_item(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SelectError::InvalidItem {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, SelectError>;

/// Checks that a budget is non-negative and converts it to a table width.
pub(crate) fn check_budget(budget: i64) -> Result<usize> {
    usize::try_from(budget).map_err(|_| SelectError::InvalidBudget(budget))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_budget() {
        assert_eq!(check_budget(0), Ok(0));
        assert_eq!(check_budget(100), Ok(100));
        assert_eq!(check_budget(-1), Err(SelectError::InvalidBudget(-1)));
    }

    #[test]
    fn test_display_messages() {
        let err = SelectError::invalid_item("pizza", "cost must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "invalid item `pizza`: cost must be positive, got 0"
        );

        let err = SelectError::TableTooLarge {
            rows: 3,
            cols: 11,
            limit: 10,
        };
        assert!(err.to_string().contains("3 x 11"));
    }
}
