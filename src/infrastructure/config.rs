//! Configuration infrastructure
//!
//! Configuration is a single JSON file holding the catalog client settings
//! and the logging settings. A missing file means defaults; every section
//! and field falls back to its default when omitted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;
use url::Url;

use super::catalog_error::{CatalogError, CatalogResult};
use super::parsing::CatalogSelectors;

/// Default values shared across the crate
pub mod defaults {
    /// Public catalog site
    pub const DEFAULT_BASE_URL: &str = "https://librivox.org";

    pub const DEFAULT_USER_AGENT: &str = concat!("librivox-catalog/", env!("CARGO_PKG_VERSION"));

    pub const CONFIG_DIR_NAME: &str = "librivox-catalog";

    pub const CONFIG_FILE_NAME: &str = "config.json";

    pub const DEFAULT_LOG_LEVEL: &str = "info";

    pub const LOG_FILE_NAME: &str = "librivox-catalog.log";
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Catalog client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog site root; search and album URLs are built from it
    pub base_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Per-request timeout; `None` leaves requests unbounded
    pub request_timeout_seconds: Option<u64>,

    /// CSS selectors for both page types
    pub selectors: CatalogSelectors,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            request_timeout_seconds: None,
            selectors: CatalogSelectors::default(),
        }
    }
}

impl CatalogConfig {
    /// Configuration pointing at another catalog root, e.g. a fixture server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Parsed base URL; must be an absolute http(s) URL
    pub fn parsed_base_url(&self) -> CatalogResult<Url> {
        let url = Url::parse(self.base_url.trim())
            .map_err(|e| CatalogError::configuration("base_url", e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::configuration(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        Ok(url)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output (stderr, so stdout stays machine readable)
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for the log file; defaults to `logs/` next to the executable
    pub log_dir: Option<PathBuf>,

    /// Module-specific log level filters (e.g., "reqwest": "warn")
    pub module_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            console_output: true,
            file_output: false,
            log_dir: None,
            module_filters: HashMap::new(),
        }
    }
}

/// Loads and saves the configuration file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join(defaults::CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Manager for the default configuration file location
    pub fn new() -> Result<Self> {
        let config_path = Self::get_config_dir()?.join(defaults::CONFIG_FILE_NAME);
        Ok(Self { config_path })
    }

    /// Manager for an explicit configuration file
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration; a missing file yields defaults
    pub async fn load_config(&self) -> Result<AppConfig> {
        let exists = fs::try_exists(&self.config_path)
            .await
            .with_context(|| format!("Failed to access config file: {:?}", self.config_path))?;
        if !exists {
            info!("No configuration file at {:?}, using defaults", self.config_path);
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .with_context(|| format!("Failed to read config file: {:?}", self.config_path))?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", self.config_path))?;

        info!("Loaded configuration from {:?}", self.config_path);
        Ok(config)
    }

    /// Save the configuration, creating the parent directory when needed
    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create config directory: {parent:?}"))?;
        }

        let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.config_path, content)
            .await
            .with_context(|| format!("Failed to write config file: {:?}", self.config_path))?;

        info!("Saved configuration to {:?}", self.config_path);
        Ok(())
    }
}
