//! # In-Memory Tariff Source
//!
//! In-memory implementation of [`TariffSource`] for tests and embedding.
//!
//! Rows are kept in a `Vec` so table order is preserved exactly as
//! inserted.

use crate::domain::entities::TariffRow;
use crate::infrastructure::persistence::traits::{RepositoryResult, TariffSource};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`TariffSource`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTariffSource {
    rows: Arc<RwLock<Vec<TariffRow>>>,
}

impl InMemoryTariffSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding `rows`.
    #[must_use]
    pub fn with_rows(rows: Vec<TariffRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Appends a row at the end of the table.
    pub async fn push(&self, row: TariffRow) {
        self.rows.write().await.push(row);
    }

    /// Replaces the whole table.
    pub async fn replace(&self, rows: Vec<TariffRow>) {
        *self.rows.write().await = rows;
    }

    /// Removes every row.
    pub async fn clear(&self) {
        self.rows.write().await.clear();
    }

    /// Returns the number of rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns true if there are no rows.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl TariffSource for InMemoryTariffSource {
    async fn load_rows(&self) -> RepositoryResult<Vec<TariffRow>> {
        Ok(self.rows.read().await.clone())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_source_is_empty() {
        let source = InMemoryTariffSource::new();
        assert!(source.is_empty().await);
        assert!(source.load_rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn push_preserves_order() {
        let source = InMemoryTariffSource::new();
        source.push(TariffRow::new("4x12", "A", "عادي")).await;
        source.push(TariffRow::new("3x4", "A", "عادي")).await;

        let rows = source.load_rows().await.unwrap();
        let sizes: Vec<&str> = rows.iter().map(TariffRow::size).collect();
        assert_eq!(sizes, vec!["4x12", "3x4"]);
    }

    #[tokio::test]
    async fn replace_and_clear() {
        let source = InMemoryTariffSource::with_rows(vec![TariffRow::new("4x12", "A", "عادي")]);
        assert_eq!(source.len().await, 1);

        source
            .replace(vec![
                TariffRow::new("3x4", "A", "عادي"),
                TariffRow::new("3x6", "A", "عادي"),
            ])
            .await;
        assert_eq!(source.len().await, 2);

        source.clear().await;
        assert!(source.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let source = InMemoryTariffSource::new();
        let handle = source.clone();
        handle.push(TariffRow::new("4x12", "A", "عادي")).await;
        assert_eq!(source.len().await, 1);
    }

    #[tokio::test]
    async fn categories_from_rows() {
        let source = InMemoryTariffSource::with_rows(vec![
            TariffRow::new("4x12", "A", "عادي"),
            TariffRow::new("4x12", "A", "مسوق"),
        ]);
        assert_eq!(
            source.load_customer_categories().await.unwrap(),
            vec!["عادي", "مسوق"]
        );
    }
}
