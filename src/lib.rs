//! # Billboard Pricing
//!
//! Tariff resolution engine for billboard rental contracts.
//!
//! Given a billboard size, an optional quality level, a customer category and
//! a rental duration, the engine looks the contracted price up in a tariff
//! table snapshot supplied by a data-access collaborator.
//!
//! # Architecture
//!
//! ```text
//! domain/          value objects, TariffRow/TariffTable, PricingResolver
//! application/     PricingService (snapshot owner), BookingQuoteService
//! infrastructure/  TariffSource port and its adapters (memory, JSON file, REST)
//! config           layered configuration (defaults → file → env)
//! telemetry        tracing subscriber setup
//! ```
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::domain::entities::{TariffRow, TariffTable};
//! use billboard_pricing::domain::services::PricingResolver;
//! use billboard_pricing::domain::value_objects::Price;
//!
//! let table = TariffTable::new(vec![
//!     TariffRow::new("4x12", "A", "عادي")
//!         .with_one_month(3500)
//!         .with_full_year(33600),
//! ]);
//! let resolver = PricingResolver::default();
//!
//! assert_eq!(
//!     resolver.resolve_term_price(&table, "12X4", Some("A"), "عادي", 1),
//!     Some(Price::from(3500)),
//! );
//! assert_eq!(resolver.resolve_term_price(&table, "4x12", Some("A"), "شركات", 1), None);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
