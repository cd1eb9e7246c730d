//! # Checked Arithmetic
//!
//! Overflow-safe money arithmetic used when totalling bookings.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`Rounding`] - Explicit rounding mode for money amounts
//! - [`round_money`], [`percent_of`], [`checked_sum`] - helpers built on the trait
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::domain::value_objects::arithmetic::{CheckedArithmetic, percent_of};
//! use rust_decimal::Decimal;
//!
//! let subtotal = Decimal::new(7000, 0);
//! assert_eq!(percent_of(subtotal, Decimal::new(10, 0)).unwrap(), Decimal::new(700, 0));
//! assert!(subtotal.safe_div(Decimal::ZERO).is_err());
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounding mode for money amounts.
///
/// # Examples
///
/// ```
/// use billboard_pricing::domain::value_objects::arithmetic::{Rounding, round_money};
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(12345, 3); // 12.345
/// assert_eq!(round_money(amount, 2, Rounding::Down), Decimal::new(1234, 2));
/// assert_eq!(round_money(amount, 2, Rounding::HalfAwayFromZero), Decimal::new(1235, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round towards zero (truncate).
    Down,
    /// Round away from zero.
    Up,
    /// Round to nearest, ties away from zero.
    #[default]
    HalfAwayFromZero,
}

impl Rounding {
    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Down => RoundingStrategy::ToZero,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "Down"),
            Self::Up => write!(f, "Up"),
            Self::HalfAwayFromZero => write!(f, "HalfAwayFromZero"),
        }
    }
}

/// Rounds `value` to `decimal_places` using the given mode.
#[inline]
#[must_use]
pub fn round_money(value: Decimal, decimal_places: u32, rounding: Rounding) -> Decimal {
    value.round_dp_with_strategy(decimal_places, rounding.strategy())
}

/// Returns `pct` percent of `amount`, unrounded.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the product overflows.
#[inline]
pub fn percent_of(amount: Decimal, pct: Decimal) -> ArithmeticResult<Decimal> {
    amount.safe_mul(pct)?.safe_div(Decimal::ONE_HUNDRED)
}

/// Sums values with overflow checking.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the running total overflows.
pub fn checked_sum<I>(values: I) -> ArithmeticResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.safe_add(value))
}

/// Trait for checked arithmetic operations.
///
/// Implementors must never panic: overflow, underflow and division by
/// zero are reported through [`ArithmeticError`].
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod checked_decimal {
        use super::*;

        #[test]
        fn add_and_sub() {
            let a = Decimal::new(3500, 0);
            let b = Decimal::new(500, 0);
            assert_eq!(a.safe_add(b).unwrap(), Decimal::new(4000, 0));
            assert_eq!(a.safe_sub(b).unwrap(), Decimal::new(3000, 0));
        }

        #[test]
        fn add_overflow() {
            assert_eq!(
                Decimal::MAX.safe_add(Decimal::ONE),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn sub_underflow() {
            assert_eq!(
                Decimal::MIN.safe_sub(Decimal::ONE),
                Err(ArithmeticError::Underflow)
            );
        }

        #[test]
        fn mul_overflow() {
            assert_eq!(
                Decimal::MAX.safe_mul(Decimal::TWO),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn div_by_zero() {
            assert_eq!(
                Decimal::ONE.safe_div(Decimal::ZERO),
                Err(ArithmeticError::DivisionByZero)
            );
        }
    }

    mod helpers {
        use super::*;

        #[test]
        fn percent_of_amount() {
            let result = percent_of(Decimal::new(33600, 0), Decimal::new(15, 0)).unwrap();
            assert_eq!(result, Decimal::new(5040, 0));
        }

        #[test]
        fn percent_of_zero_pct() {
            let result = percent_of(Decimal::new(33600, 0), Decimal::ZERO).unwrap();
            assert!(result.is_zero());
        }

        #[test]
        fn checked_sum_of_values() {
            let total = checked_sum([
                Decimal::new(3500, 0),
                Decimal::new(4200, 0),
                Decimal::new(125, 1),
            ])
            .unwrap();
            assert_eq!(total, Decimal::new(77125, 1));
        }

        #[test]
        fn checked_sum_empty_is_zero() {
            assert_eq!(checked_sum(std::iter::empty()).unwrap(), Decimal::ZERO);
        }

        #[test]
        fn checked_sum_overflow() {
            assert_eq!(
                checked_sum([Decimal::MAX, Decimal::ONE]),
                Err(ArithmeticError::Overflow)
            );
        }
    }

    mod rounding {
        use super::*;

        #[test]
        fn modes() {
            let value = Decimal::new(10005, 3); // 10.005
            assert_eq!(round_money(value, 2, Rounding::Down), Decimal::new(1000, 2));
            assert_eq!(round_money(value, 2, Rounding::Up), Decimal::new(1001, 2));
            assert_eq!(
                round_money(value, 2, Rounding::HalfAwayFromZero),
                Decimal::new(1001, 2)
            );
        }

        #[test]
        fn default_is_half_away_from_zero() {
            assert_eq!(Rounding::default(), Rounding::HalfAwayFromZero);
        }

        #[test]
        fn display() {
            assert_eq!(Rounding::Down.to_string(), "Down");
            assert_eq!(Rounding::HalfAwayFromZero.to_string(), "HalfAwayFromZero");
        }
    }
}
