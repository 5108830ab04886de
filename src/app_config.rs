use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default lookup language (ISO code or name)
    #[serde(default = "default_language")]
    pub language: String,

    /// Upstream service config
    #[serde(default)]
    pub service: ServiceConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Upstream dictionary service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Service base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Max retry attempts for transient faults
    #[serde(default = "default_retry_count")]
    pub max_retries: u32,

    /// Base backoff time in milliseconds, doubled on each retry
    #[serde(default = "default_retry_backoff_ms")]
    pub backoff_base_ms: u64,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_endpoint() -> String {
    "https://en.wiktionary.org".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // The default language must resolve
        crate::language_utils::resolve_language(&self.language)
            .map_err(|e| anyhow::anyhow!("Invalid default language: {}", e))?;

        if self.service.endpoint.is_empty() {
            return Err(anyhow::anyhow!("Service endpoint must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            service: ServiceConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_retry_count(),
            backoff_base_ms: default_retry_backoff_ms(),
        }
    }
}
