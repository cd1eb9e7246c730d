//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Matching Keys
//!
//! - [`CanonicalSize`]: normalized `"<small>x<large>"` size key
//! - [`BillboardLevel`], [`CustomerCategory`]: free-form table tags
//!
//! ## Durations
//!
//! - [`DurationBucket`]: the six priced columns
//! - [`RentalDuration`]: months or days requested by a booking
//!
//! ## Numeric Types
//!
//! - [`Price`]: decimal money amount
//! - [`PriceCell`]: raw price column with lenient coercion
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`], [`CheckedArithmetic`], [`Rounding`]
//!
//! ## Domain Enums
//!
//! - `FallbackPolicy`, `DuplicatePolicy`, `MatchTier`

pub mod arithmetic;
pub mod canonical_size;
pub mod duration;
pub mod enums;
pub mod price;
pub mod tags;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, Rounding};
pub use canonical_size::{CanonicalSize, DEFAULT_SIZE};
pub use duration::{DurationBucket, RentalDuration};
pub use enums::{DuplicatePolicy, FallbackPolicy, MatchTier};
pub use price::{Price, PriceCell};
pub use tags::{
    BillboardLevel, CustomerCategory, DEFAULT_CUSTOMER_CATEGORIES, DEFAULT_LEVEL,
};
