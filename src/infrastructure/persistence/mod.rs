//! # Persistence Layer
//!
//! The tariff source port and its adapters.
//!
//! ## Port
//!
//! - [`TariffSource`]: loads the tariff table in table order
//!
//! ## Implementations
//!
//! - `in_memory`: rows held in memory, for tests and embedding
//! - `json_file`: a JSON export on disk
//! - `rest`: a PostgREST endpoint (hosted Supabase table)
//! - `fallback`: several sources tried in order

pub mod fallback;
pub mod in_memory;
pub mod json_file;
pub mod rest;
pub mod traits;

pub use fallback::FallbackTariffSource;
pub use in_memory::InMemoryTariffSource;
pub use json_file::JsonFileTariffSource;
pub use rest::RestTariffSource;
pub use traits::{RepositoryError, RepositoryResult, TariffSource};
