//! # Tariff Tags
//!
//! Free-form labels that segment the tariff table.
//!
//! - [`BillboardLevel`]: quality level of a billboard (`"A"`, `"B"`, `"S"`, ...)
//! - [`CustomerCategory`]: pricing tier of the customer
//!
//! Neither is a closed enum: the table defines which values exist, and
//! matching is exact string equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level assumed when the caller supplies none.
pub const DEFAULT_LEVEL: &str = "A";

/// Categories offered when the table has none.
pub const DEFAULT_CUSTOMER_CATEGORIES: [&str; 4] = ["عادي", "مسوق", "شركات", "المدينة"];

/// Quality level of a billboard.
///
/// # Examples
///
/// ```
/// use billboard_pricing::domain::value_objects::BillboardLevel;
///
/// assert_eq!(BillboardLevel::or_default(None).as_str(), "A");
/// assert_eq!(BillboardLevel::or_default(Some("")).as_str(), "A");
/// assert_eq!(BillboardLevel::or_default(Some("S")).as_str(), "S");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillboardLevel(String);

impl BillboardLevel {
    /// Creates a level from any label.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        Self(level.into())
    }

    /// Uses the given level, or [`DEFAULT_LEVEL`] when absent or empty.
    #[must_use]
    pub fn or_default(level: Option<&str>) -> Self {
        match level {
            Some(l) if !l.is_empty() => Self(l.to_string()),
            _ => Self::default(),
        }
    }

    /// Returns the label.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BillboardLevel {
    fn default() -> Self {
        Self(DEFAULT_LEVEL.to_string())
    }
}

impl fmt::Display for BillboardLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pricing tier of a customer.
///
/// # Examples
///
/// ```
/// use billboard_pricing::domain::value_objects::CustomerCategory;
///
/// let defaults = CustomerCategory::defaults();
/// assert_eq!(defaults.len(), 4);
/// assert_eq!(defaults[0].as_str(), "عادي");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerCategory(String);

impl CustomerCategory {
    /// Creates a category from any label.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    /// Returns the built-in category list.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CUSTOMER_CATEGORIES
            .iter()
            .map(|c| Self::new(*c))
            .collect()
    }

    /// Returns the label.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerCategory {
    fn from(category: &str) -> Self {
        Self::new(category)
    }
}
