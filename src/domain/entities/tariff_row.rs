//! # Tariff Row
//!
//! One priced combination of size, level and customer category.
//!
//! The serde shape matches the upstream `pricing` table, including its
//! digit-prefixed column names:
//!
//! ```json
//! {
//!   "size": "4x12",
//!   "billboard_level": "A",
//!   "customer_category": "عادي",
//!   "one_day": 150,
//!   "one_month": 3500,
//!   "2_months": 6800,
//!   "3_months": 9900,
//!   "6_months": 18000,
//!   "full_year": 33600
//! }
//! ```
//!
//! Text columns may be null upstream and deserialize as empty strings.
//! Price columns may be missing, null, numbers or text.

use crate::domain::value_objects::{DurationBucket, Price, PriceCell};
use serde::{Deserialize, Deserializer, Serialize};

/// A row of the tariff table.
///
/// # Examples
///
/// ```
/// use billboard_pricing::domain::entities::TariffRow;
/// use billboard_pricing::domain::value_objects::{DurationBucket, Price};
///
/// let row = TariffRow::new("4x12", "A", "عادي").with_one_month(3500);
/// assert_eq!(row.price(DurationBucket::OneMonth), Some(Price::from(3500)));
/// assert_eq!(row.price(DurationBucket::FullYear), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffRow {
    #[serde(default, deserialize_with = "nullable_string")]
    size: String,
    #[serde(default, deserialize_with = "nullable_string")]
    billboard_level: String,
    #[serde(default, deserialize_with = "nullable_string")]
    customer_category: String,
    #[serde(default)]
    one_day: PriceCell,
    #[serde(default)]
    one_month: PriceCell,
    #[serde(default, rename = "2_months")]
    two_months: PriceCell,
    #[serde(default, rename = "3_months")]
    three_months: PriceCell,
    #[serde(default, rename = "6_months")]
    six_months: PriceCell,
    #[serde(default)]
    full_year: PriceCell,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl TariffRow {
    /// Creates a row with every price column empty.
    #[must_use]
    pub fn new(
        size: impl Into<String>,
        billboard_level: impl Into<String>,
        customer_category: impl Into<String>,
    ) -> Self {
        Self {
            size: size.into(),
            billboard_level: billboard_level.into(),
            customer_category: customer_category.into(),
            one_day: PriceCell::null(),
            one_month: PriceCell::null(),
            two_months: PriceCell::null(),
            three_months: PriceCell::null(),
            six_months: PriceCell::null(),
            full_year: PriceCell::null(),
        }
    }

    /// Sets the cell of the given bucket.
    #[must_use]
    pub fn with_cell(mut self, bucket: DurationBucket, cell: PriceCell) -> Self {
        *self.cell_mut(bucket) = cell;
        self
    }

    /// Sets the daily rate.
    #[must_use]
    pub fn with_one_day(self, amount: i64) -> Self {
        self.with_cell(DurationBucket::OneDay, PriceCell::from(amount))
    }

    /// Sets the one-month price.
    #[must_use]
    pub fn with_one_month(self, amount: i64) -> Self {
        self.with_cell(DurationBucket::OneMonth, PriceCell::from(amount))
    }

    /// Sets the two-month price.
    #[must_use]
    pub fn with_two_months(self, amount: i64) -> Self {
        self.with_cell(DurationBucket::TwoMonths, PriceCell::from(amount))
    }

    /// Sets the three-month price.
    #[must_use]
    pub fn with_three_months(self, amount: i64) -> Self {
        self.with_cell(DurationBucket::ThreeMonths, PriceCell::from(amount))
    }

    /// Sets the six-month price.
    #[must_use]
    pub fn with_six_months(self, amount: i64) -> Self {
        self.with_cell(DurationBucket::SixMonths, PriceCell::from(amount))
    }

    /// Sets the twelve-month price.
    #[must_use]
    pub fn with_full_year(self, amount: i64) -> Self {
        self.with_cell(DurationBucket::FullYear, PriceCell::from(amount))
    }

    /// Returns the size exactly as stored.
    #[inline]
    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Returns the billboard level.
    #[inline]
    #[must_use]
    pub fn billboard_level(&self) -> &str {
        &self.billboard_level
    }

    /// Returns the customer category.
    #[inline]
    #[must_use]
    pub fn customer_category(&self) -> &str {
        &self.customer_category
    }

    /// Returns the raw cell of a bucket.
    #[must_use]
    pub fn cell(&self, bucket: DurationBucket) -> &PriceCell {
        match bucket {
            DurationBucket::OneDay => &self.one_day,
            DurationBucket::OneMonth => &self.one_month,
            DurationBucket::TwoMonths => &self.two_months,
            DurationBucket::ThreeMonths => &self.three_months,
            DurationBucket::SixMonths => &self.six_months,
            DurationBucket::FullYear => &self.full_year,
        }
    }

    fn cell_mut(&mut self, bucket: DurationBucket) -> &mut PriceCell {
        match bucket {
            DurationBucket::OneDay => &mut self.one_day,
            DurationBucket::OneMonth => &mut self.one_month,
            DurationBucket::TwoMonths => &mut self.two_months,
            DurationBucket::ThreeMonths => &mut self.three_months,
            DurationBucket::SixMonths => &mut self.six_months,
            DurationBucket::FullYear => &mut self.full_year,
        }
    }

    /// Returns the coerced price of a bucket.
    #[inline]
    #[must_use]
    pub fn price(&self, bucket: DurationBucket) -> Option<Price> {
        self.cell(bucket).coerce()
    }
}
