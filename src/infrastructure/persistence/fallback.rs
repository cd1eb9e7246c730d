//! # Fallback Tariff Source
//!
//! Chains several [`TariffSource`]s, e.g. the hosted table first and a
//! local JSON export second.
//!
//! ```text
//! REST → JSON file → memory
//! ```
//!
//! The first source that loads successfully wins. Failures are logged and
//! the next source is tried; if every source fails, the last error is
//! returned.

use crate::domain::entities::TariffRow;
use crate::infrastructure::persistence::traits::{RepositoryError, RepositoryResult, TariffSource};
use async_trait::async_trait;
use std::sync::Arc;

/// A tariff source that tries multiple sources in order.
///
/// # Examples
///
/// ```
/// use billboard_pricing::infrastructure::persistence::FallbackTariffSource;
///
/// // Sources are tried in the order they are given.
/// let source = FallbackTariffSource::new(vec![]);
/// assert!(source.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FallbackTariffSource {
    sources: Vec<Arc<dyn TariffSource>>,
}

impl FallbackTariffSource {
    /// Creates a fallback source from an ordered list of sources.
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn TariffSource>>) -> Self {
        Self { sources }
    }

    /// Returns the number of chained sources.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no source is chained.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[async_trait]
impl TariffSource for FallbackTariffSource {
    async fn load_rows(&self) -> RepositoryResult<Vec<TariffRow>> {
        let mut last_error = None;
        for source in &self.sources {
            match source.load_rows().await {
                Ok(rows) => return Ok(rows),
                Err(e) => {
                    tracing::warn!(
                        source = source.name(),
                        error = %e,
                        "tariff source failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| RepositoryError::internal("no tariff sources configured")))
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
