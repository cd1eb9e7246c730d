//! # Rental Durations
//!
//! - [`DurationBucket`]: the six priced columns of a tariff row
//! - [`RentalDuration`]: what a booking actually asks for (months or days)
//!
//! # Bucket Mapping
//!
//! ```text
//! months  1 → one_month
//! months  2 → 2_months
//! months  3 → 3_months
//! months  6 → 6_months
//! months 12 → full_year
//! other     → one_month
//! per day   → one_day
//! ```

use crate::domain::value_objects::enums::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One priced duration column of a tariff row.
///
/// # Examples
///
/// ```
/// use billboard_pricing::domain::value_objects::DurationBucket;
///
/// assert_eq!(DurationBucket::from_months(12), DurationBucket::FullYear);
/// assert_eq!(DurationBucket::from_months(5), DurationBucket::OneMonth);
/// assert_eq!(DurationBucket::FullYear.column(), "full_year");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DurationBucket {
    /// Daily rate.
    OneDay = 0,
    /// One month.
    OneMonth = 1,
    /// Two months.
    TwoMonths = 2,
    /// Three months.
    ThreeMonths = 3,
    /// Six months.
    SixMonths = 4,
    /// Twelve months.
    FullYear = 5,
}

impl DurationBucket {
    /// All buckets in column order.
    pub const ALL: [Self; 6] = [
        Self::OneDay,
        Self::OneMonth,
        Self::TwoMonths,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::FullYear,
    ];

    /// Maps a month count to its bucket.
    ///
    /// Only 1, 2, 3, 6 and 12 have their own bucket; every other value,
    /// including zero and negatives, maps to [`DurationBucket::OneMonth`].
    #[inline]
    #[must_use]
    pub const fn from_months(months: i64) -> Self {
        match months {
            2 => Self::TwoMonths,
            3 => Self::ThreeMonths,
            6 => Self::SixMonths,
            12 => Self::FullYear,
            _ => Self::OneMonth,
        }
    }

    /// Returns the month count of a monthly bucket, `None` for the daily rate.
    #[inline]
    #[must_use]
    pub const fn months(self) -> Option<u32> {
        match self {
            Self::OneDay => None,
            Self::OneMonth => Some(1),
            Self::TwoMonths => Some(2),
            Self::ThreeMonths => Some(3),
            Self::SixMonths => Some(6),
            Self::FullYear => Some(12),
        }
    }

    /// Returns true for the daily rate.
    #[inline]
    #[must_use]
    pub const fn is_daily(self) -> bool {
        matches!(self, Self::OneDay)
    }

    /// Returns the tariff table column holding this bucket's price.
    #[inline]
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::OneDay => "one_day",
            Self::OneMonth => "one_month",
            Self::TwoMonths => "2_months",
            Self::ThreeMonths => "3_months",
            Self::SixMonths => "6_months",
            Self::FullYear => "full_year",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for DurationBucket {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one_day" | "daily" | "day" => Ok(Self::OneDay),
            "one_month" | "1_month" => Ok(Self::OneMonth),
            "2_months" | "two_months" => Ok(Self::TwoMonths),
            "3_months" | "three_months" => Ok(Self::ThreeMonths),
            "6_months" | "six_months" => Ok(Self::SixMonths),
            "full_year" | "12_months" | "year" => Ok(Self::FullYear),
            _ => Err(ParseEnumError::InvalidValue(
                "DurationBucket",
                s.to_string(),
            )),
        }
    }
}

/// Length of a rental as requested by a booking.
///
/// # Examples
///
/// ```
/// use billboard_pricing::domain::value_objects::{DurationBucket, RentalDuration};
///
/// assert_eq!(RentalDuration::Months(6).bucket(), DurationBucket::SixMonths);
/// assert_eq!(RentalDuration::Days(10).bucket(), DurationBucket::OneDay);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalDuration {
    /// A term rental, priced from a monthly bucket.
    Months(i64),
    /// A short rental, priced at the daily rate times the number of days.
    Days(u32),
}

impl RentalDuration {
    /// Returns the bucket whose column prices this duration.
    #[inline]
    #[must_use]
    pub const fn bucket(self) -> DurationBucket {
        match self {
            Self::Months(months) => DurationBucket::from_months(months),
            Self::Days(_) => DurationBucket::OneDay,
        }
    }
}

impl fmt::Display for RentalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(m) => write!(f, "{m} month(s)"),
            Self::Days(d) => write!(f, "{d} day(s)"),
        }
    }
}
