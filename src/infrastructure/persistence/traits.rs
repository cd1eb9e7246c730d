//! # Tariff Source Port
//!
//! The data-access boundary of the pricing engine.
//!
//! A [`TariffSource`] fetches the full tariff table from wherever it lives
//! (a hosted Postgres behind PostgREST, a JSON export, memory). It returns
//! rows in table order; the order is significant because it breaks ties
//! during matching.
//!
//! # Examples
//!
//! ```ignore
//! use billboard_pricing::infrastructure::persistence::TariffSource;
//!
//! async fn count_rows(source: &impl TariffSource) -> usize {
//!     source.load_rows().await.map(|rows| rows.len()).unwrap_or(0)
//! }
//! ```

use crate::domain::entities::TariffRow;
use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Error type for tariff source operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The table or resource does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend rejected the query.
    #[error("Query error: {0}")]
    Query(String),

    /// Rows could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Local I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout talking to the backend.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if retrying the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout(_))
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for tariff source operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Source of tariff table rows.
#[async_trait]
pub trait TariffSource: Send + Sync + fmt::Debug {
    /// Loads every row of the tariff table, in table order.
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` if the backend cannot be reached or its
    /// response cannot be decoded.
    async fn load_rows(&self) -> RepositoryResult<Vec<TariffRow>>;

    /// Loads the distinct customer categories, in first-appearance order.
    ///
    /// The default implementation derives them from [`load_rows`](Self::load_rows).
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` if the rows cannot be loaded.
    async fn load_customer_categories(&self) -> RepositoryResult<Vec<String>> {
        let rows = self.load_rows().await?;
        let mut seen = HashSet::new();
        Ok(rows
            .iter()
            .map(TariffRow::customer_category)
            .filter(|c| !c.is_empty() && seen.insert(*c))
            .map(str::to_string)
            .collect())
    }

    /// Short name used in logs.
    fn name(&self) -> &str;
}
