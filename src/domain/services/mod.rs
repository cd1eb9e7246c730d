//! # Domain Services
//!
//! - [`PricingResolver`]: tariff lookup over a table snapshot

pub mod pricing_resolver;

pub use pricing_resolver::{PriceQuery, PricingResolver, Resolution};
