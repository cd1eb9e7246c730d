//! # Domain Enums
//!
//! Policy and outcome enumerations for tariff resolution.
//!
//! - [`FallbackPolicy`] - How far the daily-rate lookup may fall back
//! - [`DuplicatePolicy`] - Which row wins when a table repeats a key
//! - [`MatchTier`] - Which matching rule produced a price
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback policy for daily-rate resolution.
///
/// Term prices never fall back across customer categories. Historically the
/// daily rate did: when no row matched the size and category it took the
/// first row with the size alone. That behaviour is kept behind
/// [`FallbackPolicy::DailyAnyCategory`].
///
/// # Examples
///
/// ```
/// use billboard_pricing::domain::value_objects::enums::FallbackPolicy;
///
/// assert_eq!(FallbackPolicy::default(), FallbackPolicy::WithinCategory);
/// assert_eq!("daily_any_category".parse::<FallbackPolicy>().unwrap(), FallbackPolicy::DailyAnyCategory);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum FallbackPolicy {
    /// Every lookup stays inside the requested customer category.
    #[default]
    WithinCategory = 0,
    /// Daily lookups may fall back to any row with the requested size.
    DailyAnyCategory = 1,
}

impl FallbackPolicy {
    /// Returns true if the daily lookup may cross categories.
    #[inline]
    #[must_use]
    pub const fn daily_crosses_category(self) -> bool {
        matches!(self, Self::DailyAnyCategory)
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithinCategory => write!(f, "within_category"),
            Self::DailyAnyCategory => write!(f, "daily_any_category"),
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "within_category" => Ok(Self::WithinCategory),
            "daily_any_category" => Ok(Self::DailyAnyCategory),
            _ => Err(ParseEnumError::InvalidValue("FallbackPolicy", s.to_string())),
        }
    }
}

/// Tie-break rule for rows sharing a (size, level, category) key.
///
/// # Examples
///
/// ```
/// use billboard_pricing::domain::value_objects::enums::DuplicatePolicy;
///
/// assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::FirstWins);
/// assert_eq!(DuplicatePolicy::Reject.to_string(), "reject");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DuplicatePolicy {
    /// The first row in table order is kept.
    #[default]
    FirstWins = 0,
    /// The last row in table order is kept.
    LastWins = 1,
    /// Building a table with duplicates fails.
    Reject = 2,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstWins => write!(f, "first_wins"),
            Self::LastWins => write!(f, "last_wins"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "first_wins" | "first" => Ok(Self::FirstWins),
            "last_wins" | "last" => Ok(Self::LastWins),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseEnumError::InvalidValue("DuplicatePolicy", s.to_string())),
        }
    }
}

/// The matching rule that selected a tariff row.
///
/// Tiers are tried in ascending order; the first that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MatchTier {
    /// Size, level and category all matched.
    Exact = 0,
    /// Size and category matched; level ignored.
    SizeAndCategory = 1,
    /// Only the size matched (daily rate under `DailyAnyCategory`).
    SizeOnly = 2,
}

impl MatchTier {
    /// Returns true if the row belongs to the requested category.
    #[inline]
    #[must_use]
    pub const fn within_category(self) -> bool {
        !matches!(self, Self::SizeOnly)
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::SizeAndCategory => write!(f, "size_and_category"),
            Self::SizeOnly => write!(f, "size_only"),
        }
    }
}

impl FromStr for MatchTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "exact" => Ok(Self::Exact),
            "size_and_category" => Ok(Self::SizeAndCategory),
            "size_only" => Ok(Self::SizeOnly),
            _ => Err(ParseEnumError::InvalidValue("MatchTier", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
