//! # Prices
//!
//! - [`Price`]: a decimal money amount
//! - [`PriceCell`]: a raw, possibly garbled price column as stored upstream
//!
//! Tariff tables are edited by hand, so a price column may hold a number,
//! a string such as `"3,500 LYD"`, or nothing at all. [`PriceCell::coerce`]
//! turns that into `Option<Price>` without ever failing.
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::domain::value_objects::{Price, PriceCell};
//!
//! assert_eq!(PriceCell::from(3500).coerce(), Some(Price::from(3500)));
//! assert_eq!(PriceCell::text("3,500 LYD").coerce(), Some(Price::from(3500)));
//! assert_eq!(PriceCell::null().coerce(), None);
//! assert_eq!(PriceCell::text("N/A").coerce(), None);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// A money amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a price from a decimal amount.
    #[inline]
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the decimal amount.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A raw price column value.
///
/// Deserializes from any JSON value; a missing column deserializes as null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceCell(Value);

impl PriceCell {
    /// An empty cell.
    #[must_use]
    pub const fn null() -> Self {
        Self(Value::Null)
    }

    /// A cell holding free text.
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self(Value::String(raw.into()))
    }

    /// A cell holding a decimal amount.
    ///
    /// Amounts that cannot be represented as a JSON number become null.
    #[must_use]
    pub fn amount(amount: Decimal) -> Self {
        Number::from_str(&amount.normalize().to_string())
            .map(|n| Self(Value::Number(n)))
            .unwrap_or_default()
    }

    /// Returns the raw JSON value.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Returns true if the cell is null or absent.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Coerces the cell to a price.
    ///
    /// - numbers are taken as-is
    /// - null is `None`
    /// - strings keep only ASCII digits, `.` and `-`, then parse; an empty
    ///   or unparseable remainder is `None`
    /// - booleans, arrays and objects are `None`
    #[must_use]
    pub fn coerce(&self) -> Option<Price> {
        match &self.0 {
            Value::Number(n) => coerce_number(n),
            Value::String(s) => coerce_text(s),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl From<i64> for PriceCell {
    fn from(amount: i64) -> Self {
        Self(Value::from(amount))
    }
}

impl From<Value> for PriceCell {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Option<i64>> for PriceCell {
    fn from(amount: Option<i64>) -> Self {
        amount.map(Self::from).unwrap_or_default()
    }
}

fn coerce_number(n: &Number) -> Option<Price> {
    if let Some(i) = n.as_i64() {
        return Some(Price(Decimal::from(i)));
    }
    if let Some(u) = n.as_u64() {
        return Some(Price(Decimal::from(u)));
    }
    let repr = n.to_string();
    Decimal::from_str(&repr)
        .or_else(|_| Decimal::from_scientific(&repr))
        .ok()
        .or_else(|| n.as_f64().and_then(Decimal::from_f64))
        .map(Price)
}

fn coerce_text(raw: &str) -> Option<Price> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok().map(Price)
}
