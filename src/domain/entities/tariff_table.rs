//! # Tariff Table
//!
//! An immutable, ordered snapshot of tariff rows.
//!
//! Each row is indexed once by its canonical size. Row order is preserved:
//! when several rows satisfy the same matching rule, the first one wins.
//! Rows that repeat a full (size, level, category) key are resolved at
//! construction time by a [`DuplicatePolicy`].
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::domain::entities::{TariffRow, TariffTable};
//!
//! let table = TariffTable::new(vec![
//!     TariffRow::new("4x12", "A", "عادي"),
//!     TariffRow::new("3x4", "B", "عادي"),
//!     TariffRow::new("4x12", "B", "شركات"),
//! ]);
//! assert_eq!(table.available_sizes(), vec!["4x12", "3x4"]);
//! assert_eq!(table.available_levels(), vec!["A", "B"]);
//! assert_eq!(table.customer_categories(), vec!["عادي", "شركات"]);
//! ```

use crate::domain::entities::tariff_row::TariffRow;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CanonicalSize, DuplicatePolicy};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// A row together with its canonical size key.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffEntry {
    size_key: CanonicalSize,
    row: TariffRow,
}

impl TariffEntry {
    fn new(row: TariffRow) -> Self {
        Self {
            size_key: CanonicalSize::parse(row.size()),
            row,
        }
    }

    /// Returns the canonical size of the row.
    #[inline]
    #[must_use]
    pub fn size_key(&self) -> &CanonicalSize {
        &self.size_key
    }

    /// Returns the row.
    #[inline]
    #[must_use]
    pub fn row(&self) -> &TariffRow {
        &self.row
    }

    fn duplicate_key(&self) -> (CanonicalSize, String, String) {
        (
            self.size_key.clone(),
            self.row.billboard_level().to_string(),
            self.row.customer_category().to_string(),
        )
    }
}

/// Immutable snapshot of the tariff table.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffTable {
    entries: Vec<TariffEntry>,
    loaded_at: DateTime<Utc>,
}

impl TariffTable {
    /// Builds a table keeping the first row of every duplicated key.
    #[must_use]
    pub fn new(rows: Vec<TariffRow>) -> Self {
        let entries = rows.into_iter().map(TariffEntry::new).collect();
        Self::from_entries(keep_first(entries))
    }

    /// Builds a table resolving duplicated keys with `policy`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateTariff` under [`DuplicatePolicy::Reject`]
    /// when two rows share a (canonical size, level, category) key.
    pub fn with_policy(rows: Vec<TariffRow>, policy: DuplicatePolicy) -> DomainResult<Self> {
        let entries: Vec<TariffEntry> = rows.into_iter().map(TariffEntry::new).collect();
        let entries = match policy {
            DuplicatePolicy::FirstWins => keep_first(entries),
            DuplicatePolicy::LastWins => {
                let mut reversed = entries;
                reversed.reverse();
                let mut kept = keep_first(reversed);
                kept.reverse();
                kept
            }
            DuplicatePolicy::Reject => reject_duplicates(entries)?,
        };
        Ok(Self::from_entries(entries))
    }

    /// An empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_entries(Vec::new())
    }

    fn from_entries(entries: Vec<TariffEntry>) -> Self {
        Self {
            entries,
            loaded_at: Utc::now(),
        }
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the indexed rows in table order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[TariffEntry] {
        &self.entries
    }

    /// Iterates over the rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = &TariffRow> {
        self.entries.iter().map(TariffEntry::row)
    }

    /// Returns when the snapshot was built.
    #[inline]
    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Distinct sizes as stored, in first-appearance order.
    #[must_use]
    pub fn available_sizes(&self) -> Vec<String> {
        distinct(self.rows().map(TariffRow::size))
    }

    /// Distinct billboard levels, in first-appearance order.
    #[must_use]
    pub fn available_levels(&self) -> Vec<String> {
        distinct(self.rows().map(TariffRow::billboard_level))
    }

    /// Distinct customer categories, in first-appearance order.
    #[must_use]
    pub fn customer_categories(&self) -> Vec<String> {
        distinct(self.rows().map(TariffRow::customer_category))
    }

    /// Distinct customer categories, or `defaults` when the table has none.
    #[must_use]
    pub fn customer_categories_or(&self, defaults: &[String]) -> Vec<String> {
        let categories = self.customer_categories();
        if categories.is_empty() {
            defaults.to_vec()
        } else {
            categories
        }
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}

fn keep_first(entries: Vec<TariffEntry>) -> Vec<TariffEntry> {
    let total = entries.len();
    let mut seen = HashSet::with_capacity(total);
    let kept: Vec<TariffEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.duplicate_key()))
        .collect();

    let dropped = total - kept.len();
    if dropped > 0 {
        tracing::warn!(dropped, kept = kept.len(), "dropped duplicate tariff rows");
    }
    kept
}

fn reject_duplicates(entries: Vec<TariffEntry>) -> DomainResult<Vec<TariffEntry>> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in &entries {
        if !seen.insert(entry.duplicate_key()) {
            return Err(DomainError::duplicate_tariff(
                entry.size_key().as_str(),
                entry.row().billboard_level(),
                entry.row().customer_category(),
            ));
        }
    }
    Ok(entries)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DurationBucket, Price};

    fn duplicated_rows() -> Vec<TariffRow> {
        vec![
            TariffRow::new("4x12", "A", "عادي").with_one_month(3500),
            TariffRow::new("3x4", "A", "عادي").with_one_month(900),
            TariffRow::new("12x4", "A", "عادي").with_one_month(3700),
        ]
    }

    mod construction {
        use super::*;

        #[test]
        fn empty_table() {
            let table = TariffTable::empty();
            assert!(table.is_empty());
            assert_eq!(table.len(), 0);
            assert_eq!(TariffTable::default().len(), 0);
        }

        #[test]
        fn rows_are_indexed_by_canonical_size() {
            let table = TariffTable::new(vec![TariffRow::new("12 X 4", "A", "عادي")]);
            assert_eq!(table.entries()[0].size_key().as_str(), "4x12");
            assert_eq!(table.entries()[0].row().size(), "12 X 4");
        }

        #[test]
        fn order_is_preserved() {
            let table = TariffTable::new(vec![
                TariffRow::new("3x4", "A", "عادي"),
                TariffRow::new("4x12", "A", "عادي"),
            ]);
            let sizes: Vec<&str> = table.rows().map(TariffRow::size).collect();
            assert_eq!(sizes, vec!["3x4", "4x12"]);
        }

        #[test]
        fn loaded_at_is_recent() {
            let before = Utc::now();
            let table = TariffTable::empty();
            assert!(table.loaded_at() >= before);
        }
    }

    mod duplicates {
        use super::*;

        #[test]
        fn first_wins_by_default() {
            let table = TariffTable::new(duplicated_rows());
            assert_eq!(table.len(), 2);
            assert_eq!(
                table.entries()[0].row().price(DurationBucket::OneMonth),
                Some(Price::from(3500))
            );
        }

        #[test]
        fn last_wins_keeps_later_row_in_its_position() {
            let table =
                TariffTable::with_policy(duplicated_rows(), DuplicatePolicy::LastWins).unwrap();
            assert_eq!(table.len(), 2);
            assert_eq!(table.entries()[0].row().size(), "3x4");
            assert_eq!(
                table.entries()[1].row().price(DurationBucket::OneMonth),
                Some(Price::from(3700))
            );
        }

        #[test]
        fn reject_fails_on_duplicate() {
            let err =
                TariffTable::with_policy(duplicated_rows(), DuplicatePolicy::Reject).unwrap_err();
            assert_eq!(err, DomainError::duplicate_tariff("4x12", "A", "عادي"));
        }

        #[test]
        fn reject_accepts_unique_rows() {
            let rows = vec![
                TariffRow::new("4x12", "A", "عادي"),
                TariffRow::new("4x12", "B", "عادي"),
                TariffRow::new("4x12", "A", "شركات"),
            ];
            let table = TariffTable::with_policy(rows, DuplicatePolicy::Reject).unwrap();
            assert_eq!(table.len(), 3);
        }
    }

    mod listings {
        use super::*;

        #[test]
        fn empty_table_lists_nothing() {
            let table = TariffTable::empty();
            assert!(table.available_sizes().is_empty());
            assert!(table.available_levels().is_empty());
            assert!(table.customer_categories().is_empty());
        }

        #[test]
        fn blank_values_are_skipped() {
            let table = TariffTable::new(vec![
                TariffRow::new("4x12", "", "عادي"),
                TariffRow::new("4x12", "S", ""),
            ]);
            assert_eq!(table.available_levels(), vec!["S"]);
            assert_eq!(table.customer_categories(), vec!["عادي"]);
        }

        #[test]
        fn categories_fall_back_when_empty() {
            let defaults = vec!["عادي".to_string(), "شركات".to_string()];
            assert_eq!(TariffTable::empty().customer_categories_or(&defaults), defaults);

            let table = TariffTable::new(vec![TariffRow::new("4x12", "A", "مسوق")]);
            assert_eq!(table.customer_categories_or(&defaults), vec!["مسوق"]);
        }
    }
}
