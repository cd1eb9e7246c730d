//! # HTTP
//!
//! Shared HTTP plumbing for remote tariff sources.

pub mod client;

pub use client::HttpClient;
