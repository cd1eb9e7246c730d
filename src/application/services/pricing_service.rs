//! # Pricing Service
//!
//! Owns the current tariff snapshot and answers price queries against it.
//!
//! The snapshot is an immutable [`TariffTable`] behind an `Arc`. Queries
//! clone the `Arc` under a short read lock and resolve without holding it;
//! [`PricingService::refresh`] loads a new table from the source and swaps
//! it in, keeping the previous snapshot when loading fails.
//!
//! ```text
//! TariffSource ──refresh()──▶ RwLock<Arc<TariffTable>> ──snapshot()──▶ PricingResolver
//! ```
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::application::services::PricingService;
//! use billboard_pricing::domain::entities::TariffRow;
//! use billboard_pricing::domain::value_objects::Price;
//! use billboard_pricing::infrastructure::persistence::InMemoryTariffSource;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = InMemoryTariffSource::with_rows(vec![
//!     TariffRow::new("4x12", "A", "عادي").with_one_month(3500),
//! ]);
//! let service = PricingService::new(Arc::new(source));
//! service.refresh().await.unwrap();
//!
//! assert_eq!(service.term_price("12x4", None, "عادي", 1), Some(Price::from(3500)));
//! # }
//! ```

use crate::application::error::ApplicationResult;
use crate::config::PricingConfig;
use crate::domain::entities::TariffTable;
use crate::domain::services::{PriceQuery, PricingResolver, Resolution};
use crate::domain::value_objects::{
    DEFAULT_CUSTOMER_CATEGORIES, DEFAULT_LEVEL, DEFAULT_SIZE, DuplicatePolicy, Price,
};
use crate::infrastructure::persistence::TariffSource;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Snapshot owner and query front-end for tariff lookups.
pub struct PricingService {
    source: Arc<dyn TariffSource>,
    resolver: PricingResolver,
    duplicate_policy: DuplicatePolicy,
    default_level: String,
    default_size: String,
    default_categories: Vec<String>,
    snapshot: RwLock<Arc<TariffTable>>,
}

impl PricingService {
    /// Creates a service over `source` with default policies and an empty snapshot.
    #[must_use]
    pub fn new(source: Arc<dyn TariffSource>) -> Self {
        Self {
            source,
            resolver: PricingResolver::default(),
            duplicate_policy: DuplicatePolicy::default(),
            default_level: DEFAULT_LEVEL.to_string(),
            default_size: DEFAULT_SIZE.to_string(),
            default_categories: DEFAULT_CUSTOMER_CATEGORIES
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            snapshot: RwLock::new(Arc::new(TariffTable::empty())),
        }
    }

    /// Creates a service from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the source cannot be built.
    pub fn from_config(config: &PricingConfig) -> ApplicationResult<Self> {
        let source = config.build_source()?;
        Ok(Self::new(source)
            .with_resolver(config.resolver())
            .with_duplicate_policy(config.duplicate_policy)
            .with_default_level(config.default_level.clone())
            .with_default_size(config.default_size.clone())
            .with_default_categories(config.default_categories.clone()))
    }

    /// Sets the resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: PricingResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Sets how duplicate rows are handled on refresh.
    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Sets the level used when a query has none.
    #[must_use]
    pub fn with_default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    /// Sets the size used when a query's size is empty.
    #[must_use]
    pub fn with_default_size(mut self, size: impl Into<String>) -> Self {
        self.default_size = size.into();
        self
    }

    /// Sets the categories offered when the source has none.
    #[must_use]
    pub fn with_default_categories(mut self, categories: Vec<String>) -> Self {
        self.default_categories = categories;
        self
    }

    /// Returns the resolver.
    #[inline]
    #[must_use]
    pub fn resolver(&self) -> PricingResolver {
        self.resolver
    }

    /// Returns the name of the tariff source.
    #[inline]
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Loads a fresh table from the source and makes it current.
    ///
    /// Returns the number of rows in the new snapshot. On failure the
    /// previous snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the source fails and
    /// `ApplicationError::Domain` if the rows violate the duplicate policy.
    pub async fn refresh(&self) -> ApplicationResult<usize> {
        let rows = match self.source.load_rows().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(
                    source = self.source.name(),
                    error = %e,
                    "tariff refresh failed, keeping previous snapshot"
                );
                return Err(e.into());
            }
        };

        let table = TariffTable::with_policy(rows, self.duplicate_policy)?;
        let count = table.len();
        self.install(table);

        tracing::info!(source = self.source.name(), rows = count, "tariff snapshot refreshed");
        Ok(count)
    }

    /// Replaces the current snapshot with `table`.
    pub fn install(&self, table: TariffTable) {
        *self.snapshot.write() = Arc::new(table);
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<TariffTable> {
        Arc::clone(&*self.snapshot.read())
    }

    /// Resolves `query` against the current snapshot.
    #[must_use]
    pub fn resolve(&self, query: &PriceQuery) -> Option<Resolution> {
        self.resolver.resolve(&self.snapshot(), query)
    }

    /// Returns the term price for a rental of `months`.
    #[must_use]
    pub fn term_price(
        &self,
        size: &str,
        level: Option<&str>,
        category: &str,
        months: i64,
    ) -> Option<Price> {
        self.resolver.resolve_term_price(
            &self.snapshot(),
            self.size_or_default(size),
            Some(self.level_or_default(level)),
            category,
            months,
        )
    }

    /// Returns the daily rate.
    #[must_use]
    pub fn daily_price(&self, size: &str, level: Option<&str>, category: &str) -> Option<Price> {
        self.resolver.resolve_daily_price(
            &self.snapshot(),
            self.size_or_default(size),
            Some(self.level_or_default(level)),
            category,
        )
    }

    /// Distinct sizes in the current snapshot.
    #[must_use]
    pub fn available_sizes(&self) -> Vec<String> {
        self.snapshot().available_sizes()
    }

    /// Distinct levels in the current snapshot.
    #[must_use]
    pub fn available_levels(&self) -> Vec<String> {
        self.snapshot().available_levels()
    }

    /// Distinct categories in the current snapshot, or the defaults when it has none.
    #[must_use]
    pub fn customer_categories(&self) -> Vec<String> {
        self.snapshot().customer_categories_or(&self.default_categories)
    }

    /// Asks the source for its customer categories.
    ///
    /// Falls back to the configured defaults when the source fails or
    /// returns nothing.
    pub async fn load_customer_categories(&self) -> Vec<String> {
        match self.source.load_customer_categories().await {
            Ok(categories) if !categories.is_empty() => categories,
            Ok(_) => {
                tracing::warn!(
                    source = self.source.name(),
                    "source has no customer categories, using defaults"
                );
                self.default_categories.clone()
            }
            Err(e) => {
                tracing::warn!(
                    source = self.source.name(),
                    error = %e,
                    "failed to load customer categories, using defaults"
                );
                self.default_categories.clone()
            }
        }
    }

    fn size_or_default<'a>(&'a self, size: &'a str) -> &'a str {
        if size.is_empty() { &self.default_size } else { size }
    }

    fn level_or_default<'a>(&'a self, level: Option<&'a str>) -> &'a str {
        match level {
            Some(level) if !level.is_empty() => level,
            _ => &self.default_level,
        }
    }
}

impl fmt::Debug for PricingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricingService")
            .field("source", &self.source.name())
            .field("resolver", &self.resolver)
            .field("duplicate_policy", &self.duplicate_policy)
            .field("rows", &self.snapshot().len())
            .finish_non_exhaustive()
    }
}
