//! # Domain Errors
//!
//! Error types for business rule violations.
//!
//! Price lookups never fail: a missing tariff is `None`, not an error.
//! These errors cover the operations around the lookup, such as building
//! a table snapshot under a strict duplicate policy or totalling a booking.
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::domain::errors::DomainError;
//!
//! let err = DomainError::duplicate_tariff("4x12", "A", "عادي");
//! assert!(err.to_string().contains("4x12"));
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Two rows share the same (size, level, category) key.
    #[error("duplicate tariff for size {size}, level {level}, category {category}")]
    DuplicateTariff {
        /// Canonical size key.
        size: String,
        /// Billboard level.
        level: String,
        /// Customer category.
        category: String,
    },

    /// Discount percentage outside `[0, 100]`.
    #[error("invalid discount: {0}% (must be between 0 and 100)")]
    InvalidDiscount(Decimal),

    /// Rental duration cannot be priced.
    #[error("invalid rental duration: {0}")]
    InvalidDuration(String),

    /// Checked arithmetic failed while totalling.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates a duplicate tariff error.
    #[must_use]
    pub fn duplicate_tariff(
        size: impl Into<String>,
        level: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::DuplicateTariff {
            size: size.into(),
            level: level.into(),
            category: category.into(),
        }
    }

    /// Creates an invalid duration error.
    #[must_use]
    pub fn invalid_duration(message: impl Into<String>) -> Self {
        Self::InvalidDuration(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
