//! # Application Layer
//!
//! Use cases built on the domain: keeping a tariff snapshot current and
//! quoting bookings against it.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
