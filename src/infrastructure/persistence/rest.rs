//! # REST Tariff Source
//!
//! Loads the tariff table from a PostgREST endpoint, as exposed by a hosted
//! Supabase project:
//!
//! ```text
//! GET {base_url}/rest/v1/{table}?select=*[&order={column}.asc]
//! apikey: {key}
//! Authorization: Bearer {key}
//! ```
//!
//! The response is a JSON array of rows in the upstream column shape.

use crate::domain::entities::TariffRow;
use crate::infrastructure::http::HttpClient;
use crate::infrastructure::persistence::traits::{RepositoryError, RepositoryResult, TariffSource};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

/// Default name of the tariff table.
pub const DEFAULT_TABLE: &str = "pricing";

/// Tariff source backed by a PostgREST table.
#[derive(Debug, Clone)]
pub struct RestTariffSource {
    client: HttpClient,
    endpoint: String,
    order_by: Option<String>,
}

impl RestTariffSource {
    /// Creates a source for `table` under `base_url`, authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the key is not a valid header
    /// value or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        table: &str,
        api_key: &str,
        timeout_ms: u64,
    ) -> RepositoryResult<Self> {
        let key = HeaderValue::from_str(api_key)
            .map_err(|e| RepositoryError::internal(format!("invalid api key header: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| RepositoryError::internal(format!("invalid api key header: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        Ok(Self {
            client: HttpClient::with_headers(timeout_ms, headers)?,
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            order_by: None,
        })
    }

    /// Asks the backend to return rows ordered by `column` ascending.
    ///
    /// Without an explicit order the backend returns rows in storage order.
    #[must_use]
    pub fn with_order(mut self, column: impl Into<String>) -> Self {
        self.order_by = Some(column.into());
        self
    }

    /// Returns the table endpoint URL.
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", "*".to_string())];
        if let Some(column) = &self.order_by {
            params.push(("order", format!("{}.asc", column)));
        }
        params
    }
}

#[async_trait]
impl TariffSource for RestTariffSource {
    async fn load_rows(&self) -> RepositoryResult<Vec<TariffRow>> {
        let rows: Vec<TariffRow> = self
            .client
            .get_with_params(&self.endpoint, &self.query_params())
            .await?;
        tracing::debug!(endpoint = %self.endpoint, rows = rows.len(), "loaded tariff rows");
        Ok(rows)
    }

    fn name(&self) -> &str {
        "rest"
    }
}
