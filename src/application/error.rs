//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures while loading tariff snapshots or
//! quoting bookings: domain rule violations, tariff source failures and
//! configuration problems.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)           - Business rule violations
//! ├── Repository(RepositoryError)   - Tariff source failures
//! ├── Configuration(ConfigError)    - Invalid or missing settings
//! └── Validation(String)            - Input validation failures
//! ```
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::application::error::ApplicationError;
//! use billboard_pricing::infrastructure::persistence::RepositoryError;
//!
//! let err: ApplicationError = RepositoryError::timeout("5s elapsed").into();
//! assert!(err.is_retryable());
//!
//! let err = ApplicationError::validation("size must not be blank");
//! assert!(err.is_validation());
//! ```

use crate::config::ConfigError;
use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Tariff source failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if retrying the operation may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Repository(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(e) if e.is_not_found())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
