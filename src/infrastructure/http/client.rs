//! # HTTP Client
//!
//! Thin `reqwest` wrapper used by the REST tariff source.
//!
//! Provides:
//! - Configurable timeouts
//! - Default headers (API keys)
//! - JSON deserialization
//! - Status code to [`RepositoryError`] mapping
//!
//! # Examples
//!
//! ```ignore
//! use billboard_pricing::infrastructure::http::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let rows: Vec<TariffRow> = client.get_with_params(url, &[("select", "*")]).await?;
//! ```

use crate::infrastructure::persistence::traits::{RepositoryError, RepositoryResult};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> RepositoryResult<Self> {
        Self::with_headers(timeout_ms, HeaderMap::new())
    }

    /// Creates a new HTTP client sending `default_headers` on every request.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the client cannot be created.
    pub fn with_headers(timeout_ms: u64, default_headers: HeaderMap) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(default_headers)
            .build()
            .map_err(|e| RepositoryError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` or `Timeout` if the request fails,
    /// a status-specific error for non-2xx responses, and
    /// `RepositoryError::Serialization` if the body cannot be parsed.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> RepositoryResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> RepositoryResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                RepositoryError::serialization(format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a RepositoryError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> RepositoryError {
        if error.is_timeout() {
            RepositoryError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            RepositoryError::connection(format!("Connection failed: {}", error))
        } else {
            RepositoryError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a RepositoryError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> RepositoryError {
        match status {
            StatusCode::BAD_REQUEST => RepositoryError::query(format!("Bad request: {}", body)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                RepositoryError::query(format!("Authentication failed ({}): {}", status, body))
            }
            StatusCode::NOT_FOUND => {
                RepositoryError::not_found(format!("Resource not found: {}", body))
            }
            StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                RepositoryError::connection(format!("Server error ({}): {}", status, body))
            }
            _ => RepositoryError::query(format!("HTTP error ({}): {}", status, body)),
        }
    }
}
