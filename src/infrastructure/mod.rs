//! # Infrastructure Layer
//!
//! Adapters between the pricing engine and the outside world.
//!
//! - [`persistence`]: the `TariffSource` port and its implementations
//! - [`http`]: HTTP client used by remote sources

pub mod http;
pub mod persistence;
