//! # Entities
//!
//! - [`TariffRow`]: one priced (size, level, category) combination
//! - [`TariffTable`]: an ordered, immutable snapshot of rows

pub mod tariff_row;
pub mod tariff_table;

pub use tariff_row::TariffRow;
pub use tariff_table::{TariffEntry, TariffTable};
