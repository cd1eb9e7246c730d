//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides:
//! - [`PricingService`]: owns the tariff snapshot and answers price queries
//! - [`BookingQuoteService`]: prices and totals multi-billboard bookings

pub mod booking_quote;
pub mod pricing_service;

pub use booking_quote::{
    BookingItem, BookingLine, BookingQuote, BookingQuoteService, BookingRequest,
};
pub use pricing_service::PricingService;
