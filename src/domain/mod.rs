//! # Domain Layer
//!
//! Pure pricing logic with no I/O.
//!
//! - [`value_objects`]: canonical sizes, tags, duration buckets, prices
//! - [`entities`]: tariff rows and table snapshots
//! - [`services`]: the pricing resolver
//! - [`errors`]: domain error types

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
