//! # In-Memory Sources
//!
//! In-memory implementations for testing without a backend.
//!
//! - [`InMemoryTariffSource`]: tariff rows held in memory

pub mod tariff_source;

pub use tariff_source::InMemoryTariffSource;
