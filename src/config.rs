//! # Configuration
//!
//! Layered settings for the pricing engine, built with the `config` crate:
//!
//! ```text
//! built-in defaults → optional file (TOML/JSON/YAML) → environment
//! ```
//!
//! Environment variables use the `BILLBOARD_PRICING_` prefix and `__` for
//! nesting, e.g. `BILLBOARD_PRICING_FALLBACK_POLICY=daily_any_category` or
//! `BILLBOARD_PRICING_SOURCE__BASE_URL=https://x.supabase.co`. A `.env`
//! file in the working directory is loaded first when present.
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::config::{PricingConfig, SourceKind};
//!
//! let config = PricingConfig::from_toml_str(r#"
//!     fallback_policy = "within_category"
//!
//!     [source]
//!     kind = "json_file"
//!     path = "pricing.json"
//! "#).unwrap();
//!
//! assert_eq!(config.source.kind, SourceKind::JsonFile);
//! assert_eq!(config.default_level, "A");
//! ```

use crate::domain::services::PricingResolver;
use crate::domain::value_objects::{
    DEFAULT_CUSTOMER_CATEGORIES, DEFAULT_LEVEL, DEFAULT_SIZE, DuplicatePolicy, FallbackPolicy,
};
use crate::infrastructure::persistence::rest::DEFAULT_TABLE;
use crate::infrastructure::persistence::{
    FallbackTariffSource, InMemoryTariffSource, JsonFileTariffSource, RepositoryError,
    RestTariffSource, TariffSource,
};
use crate::telemetry::LogFormat;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Prefix of environment variables read by [`PricingConfig::load`].
pub const ENV_PREFIX: &str = "BILLBOARD_PRICING";

/// Default request timeout for remote sources, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// Settings were read but are inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// The configured tariff source could not be constructed.
    #[error("tariff source setup failed: {0}")]
    Source(#[from] RepositoryError),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which backend the tariff table is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Empty in-memory table, filled by the embedding application.
    #[default]
    Memory,
    /// JSON array of rows on disk.
    JsonFile,
    /// PostgREST table.
    Rest,
}

/// Tariff source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Backend kind.
    pub kind: SourceKind,
    /// JSON export path. With `kind = "rest"` it acts as an offline fallback.
    pub path: Option<PathBuf>,
    /// Base URL of the REST backend.
    pub base_url: Option<String>,
    /// API key sent as `apikey` and bearer token.
    pub api_key: Option<String>,
    /// Table name on the REST backend.
    pub table: String,
    /// Column the REST backend orders rows by.
    pub order_by: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            path: None,
            base_url: None,
            api_key: None,
            table: DEFAULT_TABLE.to_string(),
            order_by: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SourceConfig {
    /// Checks that the settings required by `kind` are present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first missing or bad field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::invalid("source.timeout_ms must be positive"));
        }
        match self.kind {
            SourceKind::Memory => Ok(()),
            SourceKind::JsonFile => match &self.path {
                Some(_) => Ok(()),
                None => Err(ConfigError::invalid(
                    "source.path is required for json_file sources",
                )),
            },
            SourceKind::Rest => {
                if is_blank(self.base_url.as_deref()) {
                    return Err(ConfigError::invalid(
                        "source.base_url is required for rest sources",
                    ));
                }
                if is_blank(self.api_key.as_deref()) {
                    return Err(ConfigError::invalid(
                        "source.api_key is required for rest sources",
                    ));
                }
                if self.table.trim().is_empty() {
                    return Err(ConfigError::invalid("source.table must not be blank"));
                }
                Ok(())
            }
        }
    }

    /// Builds the configured tariff source.
    ///
    /// A REST source with a `path` is wrapped in a [`FallbackTariffSource`]
    /// that reads the JSON export when the backend is unreachable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if validation fails and
    /// `ConfigError::Source` if the HTTP client cannot be built.
    pub fn build(&self) -> ConfigResult<Arc<dyn TariffSource>> {
        self.validate()?;

        let source: Arc<dyn TariffSource> = match self.kind {
            SourceKind::Memory => Arc::new(InMemoryTariffSource::new()),
            SourceKind::JsonFile => match &self.path {
                Some(path) => Arc::new(JsonFileTariffSource::new(path.clone())),
                None => return Err(ConfigError::invalid("source.path is required")),
            },
            SourceKind::Rest => {
                let mut rest = RestTariffSource::new(
                    self.base_url.as_deref().unwrap_or_default(),
                    &self.table,
                    self.api_key.as_deref().unwrap_or_default(),
                    self.timeout_ms,
                )?;
                if let Some(column) = &self.order_by {
                    rest = rest.with_order(column.clone());
                }
                match &self.path {
                    Some(path) => Arc::new(FallbackTariffSource::new(vec![
                        Arc::new(rest),
                        Arc::new(JsonFileTariffSource::new(path.clone())),
                    ])),
                    None => Arc::new(rest),
                }
            }
        };

        tracing::debug!(source = source.name(), kind = ?self.kind, "tariff source configured");
        Ok(source)
    }
}

/// Pricing engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Level assumed when a query has none.
    pub default_level: String,
    /// Size assumed when a query's size is empty.
    pub default_size: String,
    /// Whether daily rates may cross customer categories.
    pub fallback_policy: FallbackPolicy,
    /// How rows sharing a key are handled when a snapshot is built.
    pub duplicate_policy: DuplicatePolicy,
    /// Categories offered when the source has none.
    pub default_categories: Vec<String>,
    /// Tariff source settings.
    pub source: SourceConfig,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL.to_string(),
            default_size: DEFAULT_SIZE.to_string(),
            fallback_policy: FallbackPolicy::default(),
            duplicate_policy: DuplicatePolicy::default(),
            default_categories: DEFAULT_CUSTOMER_CATEGORIES
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            source: SourceConfig::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl PricingConfig {
    /// Loads settings from `.env`, an optional file and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the file cannot be read or a value has
    /// the wrong type, and `ConfigError::Invalid` if validation fails.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            tracing::debug!(path = %env_file.display(), "loaded .env");
        }

        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        Self::build(builder.add_source(environment(None)))
    }

    /// Parses settings from a TOML document, without reading the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` on malformed input and
    /// `ConfigError::Invalid` if validation fails.
    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Parses settings from an explicit set of environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a value has the wrong type and
    /// `ConfigError::Invalid` if validation fails.
    pub fn from_env_map(vars: HashMap<String, String>) -> ConfigResult<Self> {
        Self::build(Config::builder().add_source(environment(Some(vars))))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> ConfigResult<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings for consistency.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first bad field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_level.trim().is_empty() {
            return Err(ConfigError::invalid("default_level must not be blank"));
        }
        if self.default_categories.iter().all(|c| c.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "default_categories must name at least one category",
            ));
        }
        self.source.validate()
    }

    /// Returns a resolver using the configured fallback policy.
    #[must_use]
    pub fn resolver(&self) -> PricingResolver {
        PricingResolver::new(self.fallback_policy)
    }

    /// Builds the configured tariff source.
    ///
    /// # Errors
    ///
    /// See [`SourceConfig::build`].
    pub fn build_source(&self) -> ConfigResult<Arc<dyn TariffSource>> {
        self.source.build()
    }
}

fn environment(vars: Option<HashMap<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("default_categories")
        .source(vars)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
