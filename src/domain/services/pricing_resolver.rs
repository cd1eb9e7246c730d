//! # Pricing Resolver
//!
//! Looks a contracted price up in a [`TariffTable`] snapshot.
//!
//! The resolver is a pure function of the snapshot and the query. It holds
//! no table of its own, performs no I/O and never fails: a missing tariff
//! is `None`.
//!
//! # Matching
//!
//! ```text
//! 1. Exact            size + level + category
//! 2. SizeAndCategory  size + category            (level ignored)
//! 3. SizeOnly         size                       (daily rate, DailyAnyCategory only)
//! ```
//!
//! Sizes are compared by [`CanonicalSize`]. Within a tier the first row in
//! table order wins. Once a row is matched its bucket column is the answer;
//! an empty column yields `None` without trying other rows.
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::domain::entities::{TariffRow, TariffTable};
//! use billboard_pricing::domain::services::PricingResolver;
//! use billboard_pricing::domain::value_objects::Price;
//!
//! let table = TariffTable::new(vec![
//!     TariffRow::new("4x12", "A", "عادي").with_one_month(3500).with_full_year(33600),
//! ]);
//! let resolver = PricingResolver::default();
//!
//! assert_eq!(resolver.resolve_term_price(&table, "4x12", Some("A"), "عادي", 12), Some(Price::from(33600)));
//! assert_eq!(resolver.resolve_term_price(&table, "4x12", Some("B"), "عادي", 1), Some(Price::from(3500)));
//! ```

use crate::domain::entities::{TariffEntry, TariffTable};
use crate::domain::value_objects::{
    BillboardLevel, CanonicalSize, CustomerCategory, DurationBucket, FallbackPolicy, MatchTier,
    Price,
};
use serde::{Deserialize, Serialize};

/// A normalized price lookup.
///
/// # Examples
///
/// ```
/// use billboard_pricing::domain::services::PriceQuery;
/// use billboard_pricing::domain::value_objects::DurationBucket;
///
/// let query = PriceQuery::term("12X4", None, "عادي", 7);
/// assert_eq!(query.size().as_str(), "4x12");
/// assert_eq!(query.level().as_str(), "A");
/// assert_eq!(query.bucket(), DurationBucket::OneMonth);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceQuery {
    size: CanonicalSize,
    level: BillboardLevel,
    category: CustomerCategory,
    bucket: DurationBucket,
}

impl PriceQuery {
    /// Builds a query, canonicalizing the size and defaulting the level.
    #[must_use]
    pub fn new(size: &str, level: Option<&str>, category: &str, bucket: DurationBucket) -> Self {
        Self {
            size: CanonicalSize::parse(size),
            level: BillboardLevel::or_default(level),
            category: CustomerCategory::new(category),
            bucket,
        }
    }

    /// Builds a term query; `months` outside {1, 2, 3, 6, 12} prices as one month.
    #[must_use]
    pub fn term(size: &str, level: Option<&str>, category: &str, months: i64) -> Self {
        Self::new(size, level, category, DurationBucket::from_months(months))
    }

    /// Builds a daily-rate query.
    #[must_use]
    pub fn daily(size: &str, level: Option<&str>, category: &str) -> Self {
        Self::new(size, level, category, DurationBucket::OneDay)
    }

    /// Returns the canonical size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> &CanonicalSize {
        &self.size
    }

    /// Returns the level used for matching.
    #[inline]
    #[must_use]
    pub fn level(&self) -> &BillboardLevel {
        &self.level
    }

    /// Returns the customer category.
    #[inline]
    #[must_use]
    pub fn category(&self) -> &CustomerCategory {
        &self.category
    }

    /// Returns the duration bucket.
    #[inline]
    #[must_use]
    pub fn bucket(&self) -> DurationBucket {
        self.bucket
    }

    fn matches(&self, entry: &TariffEntry, tier: MatchTier) -> bool {
        if entry.size_key() != &self.size {
            return false;
        }
        let row = entry.row();
        match tier {
            MatchTier::Exact => {
                row.billboard_level() == self.level.as_str()
                    && row.customer_category() == self.category.as_str()
            }
            MatchTier::SizeAndCategory => row.customer_category() == self.category.as_str(),
            MatchTier::SizeOnly => true,
        }
    }
}

/// A resolved price and how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    price: Price,
    tier: MatchTier,
    bucket: DurationBucket,
    matched_level: String,
    matched_category: String,
}

impl Resolution {
    /// Returns the price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the tier that matched.
    #[inline]
    #[must_use]
    pub fn tier(&self) -> MatchTier {
        self.tier
    }

    /// Returns the bucket that was read.
    #[inline]
    #[must_use]
    pub fn bucket(&self) -> DurationBucket {
        self.bucket
    }

    /// Returns the level of the matched row.
    #[inline]
    #[must_use]
    pub fn matched_level(&self) -> &str {
        &self.matched_level
    }

    /// Returns the category of the matched row.
    #[inline]
    #[must_use]
    pub fn matched_category(&self) -> &str {
        &self.matched_category
    }
}

/// Resolves prices from tariff table snapshots.
///
/// Cheap to copy; carries only its [`FallbackPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingResolver {
    fallback: FallbackPolicy,
}

impl PricingResolver {
    /// Creates a resolver with the given fallback policy.
    #[inline]
    #[must_use]
    pub const fn new(fallback: FallbackPolicy) -> Self {
        Self { fallback }
    }

    /// Returns the fallback policy.
    #[inline]
    #[must_use]
    pub const fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback
    }

    fn tiers(&self, bucket: DurationBucket) -> &'static [MatchTier] {
        if bucket.is_daily() && self.fallback.daily_crosses_category() {
            &[MatchTier::Exact, MatchTier::SizeAndCategory, MatchTier::SizeOnly]
        } else {
            &[MatchTier::Exact, MatchTier::SizeAndCategory]
        }
    }

    /// Finds the row a query resolves to, and the tier that matched it.
    #[must_use]
    pub fn match_row<'t>(
        &self,
        table: &'t TariffTable,
        query: &PriceQuery,
    ) -> Option<(&'t TariffEntry, MatchTier)> {
        self.tiers(query.bucket()).iter().find_map(|tier| {
            table
                .entries()
                .iter()
                .find(|entry| query.matches(entry, *tier))
                .map(|entry| (entry, *tier))
        })
    }

    /// Resolves a query to a price with its match details.
    ///
    /// Returns `None` when no row matches, or when the matched row has no
    /// usable price in the query's bucket.
    #[must_use]
    pub fn resolve(&self, table: &TariffTable, query: &PriceQuery) -> Option<Resolution> {
        let Some((entry, tier)) = self.match_row(table, query) else {
            tracing::debug!(
                size = %query.size(),
                level = %query.level(),
                category = %query.category(),
                bucket = %query.bucket(),
                "no tariff row matched"
            );
            return None;
        };

        let row = entry.row();
        let price = row.price(query.bucket());
        tracing::debug!(
            size = %query.size(),
            level = %query.level(),
            category = %query.category(),
            bucket = %query.bucket(),
            tier = %tier,
            found = price.is_some(),
            "tariff row matched"
        );

        price.map(|price| Resolution {
            price,
            tier,
            bucket: query.bucket(),
            matched_level: row.billboard_level().to_string(),
            matched_category: row.customer_category().to_string(),
        })
    }

    /// Returns the term price for a rental of `months`.
    ///
    /// `level` defaults to `"A"`; `months` outside {1, 2, 3, 6, 12} prices
    /// as one month. Never crosses customer categories.
    #[must_use]
    pub fn resolve_term_price(
        &self,
        table: &TariffTable,
        size: &str,
        level: Option<&str>,
        category: &str,
        months: i64,
    ) -> Option<Price> {
        self.resolve(table, &PriceQuery::term(size, level, category, months))
            .map(|r| r.price())
    }

    /// Returns the daily rate.
    #[must_use]
    pub fn resolve_daily_price(
        &self,
        table: &TariffTable,
        size: &str,
        level: Option<&str>,
        category: &str,
    ) -> Option<Price> {
        self.resolve(table, &PriceQuery::daily(size, level, category))
            .map(|r| r.price())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::TariffRow;
    use crate::domain::value_objects::PriceCell;

    const REGULAR: &str = "عادي";
    const CORPORATE: &str = "شركات";
    const MARKETER: &str = "مسوق";

    fn scenario_table() -> TariffTable {
        TariffTable::new(vec![
            TariffRow::new("4x12", "A", REGULAR)
                .with_one_month(3500)
                .with_full_year(33600),
        ])
    }

    fn resolver() -> PricingResolver {
        PricingResolver::default()
    }

    mod term_price {
        use super::*;

        #[test]
        fn reversed_size_matches() {
            let price = resolver().resolve_term_price(&scenario_table(), "12x4", Some("A"), REGULAR, 1);
            assert_eq!(price, Some(Price::from(3500)));
        }

        #[test]
        fn twelve_months_reads_full_year() {
            let price = resolver().resolve_term_price(&scenario_table(), "4x12", Some("A"), REGULAR, 12);
            assert_eq!(price, Some(Price::from(33600)));
        }

        #[test]
        fn other_level_falls_back_to_size_and_category() {
            let price = resolver().resolve_term_price(&scenario_table(), "4x12", Some("B"), REGULAR, 1);
            assert_eq!(price, Some(Price::from(3500)));
        }

        #[test]
        fn other_category_is_not_found() {
            let price = resolver().resolve_term_price(&scenario_table(), "4x12", Some("A"), CORPORATE, 1);
            assert_eq!(price, None);
        }

        #[test]
        fn unmapped_months_price_as_one_month() {
            let table = scenario_table();
            for months in [0, -3, 4, 5, 24] {
                assert_eq!(
                    resolver().resolve_term_price(&table, "4x12", Some("A"), REGULAR, months),
                    Some(Price::from(3500)),
                    "months {months}"
                );
            }
        }

        #[test]
        fn empty_bucket_is_not_found_without_further_fallback() {
            let table = TariffTable::new(vec![
                TariffRow::new("4x12", "A", REGULAR).with_one_month(3500),
                TariffRow::new("4x12", "B", REGULAR).with_six_months(18000),
            ]);
            let price = resolver().resolve_term_price(&table, "4x12", Some("A"), REGULAR, 6);
            assert_eq!(price, None);
        }

        #[test]
        fn missing_level_defaults_to_a() {
            let table = TariffTable::new(vec![
                TariffRow::new("4x12", "B", REGULAR).with_one_month(3000),
                TariffRow::new("4x12", "A", REGULAR).with_one_month(3500),
            ]);
            assert_eq!(
                resolver().resolve_term_price(&table, "4x12", None, REGULAR, 1),
                Some(Price::from(3500))
            );
            assert_eq!(
                resolver().resolve_term_price(&table, "4x12", Some(""), REGULAR, 1),
                Some(Price::from(3500))
            );
        }

        #[test]
        fn empty_size_uses_default_size() {
            let price = resolver().resolve_term_price(&scenario_table(), "", Some("A"), REGULAR, 1);
            assert_eq!(price, Some(Price::from(3500)));
        }

        #[test]
        fn unknown_size_is_not_found() {
            let price = resolver().resolve_term_price(&scenario_table(), "3x4", Some("A"), REGULAR, 1);
            assert_eq!(price, None);
        }

        #[test]
        fn text_cells_are_coerced() {
            let table = TariffTable::new(vec![TariffRow::new("3x4", "A", REGULAR)
                .with_cell(DurationBucket::ThreeMonths, PriceCell::text("2,700 LYD"))]);
            assert_eq!(
                resolver().resolve_term_price(&table, "4X3", Some("A"), REGULAR, 3),
                Some(Price::from(2700))
            );
        }

        #[test]
        fn term_never_crosses_category_even_with_daily_fallback() {
            let resolver = PricingResolver::new(FallbackPolicy::DailyAnyCategory);
            let price = resolver.resolve_term_price(&scenario_table(), "4x12", Some("A"), CORPORATE, 1);
            assert_eq!(price, None);
        }
    }

    mod tiers {
        use super::*;

        #[test]
        fn exact_beats_relaxed_regardless_of_order() {
            let table = TariffTable::new(vec![
                TariffRow::new("4x12", "B", REGULAR).with_one_month(3000),
                TariffRow::new("4x12", "A", REGULAR).with_one_month(3500),
            ]);
            let resolution = resolver()
                .resolve(&table, &PriceQuery::term("4x12", Some("A"), REGULAR, 1))
                .unwrap();
            assert_eq!(resolution.price(), Price::from(3500));
            assert_eq!(resolution.tier(), MatchTier::Exact);
        }

        #[test]
        fn relaxed_takes_first_in_table_order() {
            let table = TariffTable::new(vec![
                TariffRow::new("4x12", "B", REGULAR).with_one_month(3000),
                TariffRow::new("4x12", "S", REGULAR).with_one_month(4500),
            ]);
            let resolution = resolver()
                .resolve(&table, &PriceQuery::term("4x12", Some("A"), REGULAR, 1))
                .unwrap();
            assert_eq!(resolution.price(), Price::from(3000));
            assert_eq!(resolution.tier(), MatchTier::SizeAndCategory);
            assert_eq!(resolution.matched_level(), "B");
            assert_eq!(resolution.matched_category(), REGULAR);
        }

        #[test]
        fn no_leak_across_categories() {
            let table = TariffTable::new(vec![
                TariffRow::new("4x12", "A", REGULAR).with_one_month(3500),
                TariffRow::new("4x12", "A", CORPORATE).with_one_month(5000),
            ]);
            assert_eq!(
                resolver().resolve_term_price(&table, "4x12", Some("A"), MARKETER, 1),
                None
            );
        }

        #[test]
        fn match_row_reports_entry() {
            let table = scenario_table();
            let (entry, tier) = resolver()
                .match_row(&table, &PriceQuery::term("12x4", Some("B"), REGULAR, 1))
                .unwrap();
            assert_eq!(entry.size_key().as_str(), "4x12");
            assert_eq!(tier, MatchTier::SizeAndCategory);
        }
    }

    mod daily_price {
        use super::*;

        fn daily_table() -> TariffTable {
            TariffTable::new(vec![
                TariffRow::new("4x12", "A", CORPORATE).with_one_day(200),
                TariffRow::new("4x12", "A", REGULAR).with_one_day(150),
            ])
        }

        #[test]
        fn reads_one_day_column() {
            let price = resolver().resolve_daily_price(&daily_table(), "12x4", Some("A"), REGULAR);
            assert_eq!(price, Some(Price::from(150)));
        }

        #[test]
        fn within_category_by_default() {
            let price = resolver().resolve_daily_price(&daily_table(), "4x12", Some("A"), MARKETER);
            assert_eq!(price, None);
        }

        #[test]
        fn daily_any_category_falls_back_to_first_row_with_size() {
            let resolver = PricingResolver::new(FallbackPolicy::DailyAnyCategory);
            let resolution = resolver
                .resolve(&daily_table(), &PriceQuery::daily("4x12", Some("A"), MARKETER))
                .unwrap();
            assert_eq!(resolution.price(), Price::from(200));
            assert_eq!(resolution.tier(), MatchTier::SizeOnly);
            assert_eq!(resolution.matched_category(), CORPORATE);
        }

        #[test]
        fn daily_any_category_still_prefers_category() {
            let resolver = PricingResolver::new(FallbackPolicy::DailyAnyCategory);
            let price = resolver.resolve_daily_price(&daily_table(), "4x12", Some("B"), REGULAR);
            assert_eq!(price, Some(Price::from(150)));
        }

        #[test]
        fn daily_any_category_needs_size() {
            let resolver = PricingResolver::new(FallbackPolicy::DailyAnyCategory);
            let price = resolver.resolve_daily_price(&daily_table(), "3x4", Some("A"), REGULAR);
            assert_eq!(price, None);
        }
    }

    mod empty_table {
        use super::*;

        #[test]
        fn everything_is_not_found() {
            let table = TariffTable::empty();
            let resolver = PricingResolver::new(FallbackPolicy::DailyAnyCategory);
            assert_eq!(resolver.resolve_term_price(&table, "4x12", Some("A"), REGULAR, 1), None);
            assert_eq!(resolver.resolve_daily_price(&table, "4x12", Some("A"), REGULAR), None);
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let table = scenario_table();
        let query = PriceQuery::term("12 × 4", Some("B"), REGULAR, 12);
        let first = resolver().resolve(&table, &query);
        let second = resolver().resolve(&table, &query);
        assert_eq!(first, second);
        assert_eq!(first.unwrap().bucket(), DurationBucket::FullYear);
    }
}
