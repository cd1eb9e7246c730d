//! # JSON File Tariff Source
//!
//! Reads the tariff table from a JSON export: a top-level array of rows in
//! the upstream column shape (see [`TariffRow`]).

use crate::domain::entities::TariffRow;
use crate::infrastructure::persistence::traits::{RepositoryError, RepositoryResult, TariffSource};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Tariff source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileTariffSource {
    path: PathBuf,
}

impl JsonFileTariffSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TariffSource for JsonFileTariffSource {
    async fn load_rows(&self) -> RepositoryResult<Vec<TariffRow>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RepositoryError::not_found(self.path.display().to_string())
            } else {
                RepositoryError::Io(e)
            }
        })?;
        let rows: Vec<TariffRow> = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), rows = rows.len(), "loaded tariff file");
        Ok(rows)
    }

    fn name(&self) -> &str {
        "json_file"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DurationBucket, Price};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("billboard-pricing-{name}-{nanos}.json"))
    }

    #[tokio::test]
    async fn loads_rows_in_file_order() {
        let path = temp_path("ok");
        tokio::fs::write(
            &path,
            r#"[
                {"size": "4x12", "billboard_level": "A", "customer_category": "عادي", "one_month": 3500},
                {"size": "3x4", "billboard_level": "B", "customer_category": "عادي", "one_month": "900"}
            ]"#,
        )
        .await
        .unwrap();

        let rows = JsonFileTariffSource::new(&path).load_rows().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].size(), "4x12");
        assert_eq!(rows[1].price(DurationBucket::OneMonth), Some(Price::from(900)));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let source = JsonFileTariffSource::new(temp_path("missing"));
        let err = source.load_rows().await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn malformed_file_is_serialization_error() {
        let path = temp_path("bad");
        tokio::fs::write(&path, "{\"size\": ").await.unwrap();

        let err = JsonFileTariffSource::new(&path).load_rows().await.unwrap_err();
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[test]
    fn name_and_path() {
        let source = JsonFileTariffSource::new("/tmp/pricing.json");
        assert_eq!(source.name(), "json_file");
        assert_eq!(source.path(), Path::new("/tmp/pricing.json"));
    }
}
