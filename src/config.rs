//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{ApiClientConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};

pub const ENV_API_URL: &str = "HEALTH_MONITOR_API_URL";
pub const ENV_API_TIMEOUT: &str = "HEALTH_MONITOR_API_TIMEOUT";
pub const ENV_LOG_LEVEL: &str = "HEALTH_MONITOR_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "HEALTH_MONITOR_LOG_FORMAT";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Health backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// A configuration plus the problems skipped while building it.
///
/// Loading runs before the log subscriber exists, so the caller reports
/// `warnings` once logging is up.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub config: Config,
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load an explicit file, or the first default location that parses,
    /// then apply environment overrides.
    ///
    /// An explicit path that cannot be read is an error; broken default
    /// locations and invalid overrides end up in [`Loaded::warnings`].
    pub fn load_from(explicit: Option<&Path>) -> Result<Loaded, ConfigError> {
        let env = |key: &str| std::env::var(key).ok();
        match explicit {
            Some(path) => {
                let mut config = Self::load(path)?;
                let warnings = config.apply_overrides(env);
                Ok(Loaded { config, warnings })
            }
            None => Ok(Self::load_first(&default_paths(), env)),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Loaded {
        Self::load_first(&default_paths(), |key| std::env::var(key).ok())
    }

    fn load_first(paths: &[PathBuf], lookup: impl Fn(&str) -> Option<String>) -> Loaded {
        let mut warnings = Vec::new();
        let mut found = None;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    found = Some(config);
                    break;
                }
                Err(e) => warnings.push(e.to_string()),
            }
        }

        let mut config = found.unwrap_or_default();
        warnings.extend(config.apply_overrides(lookup));
        Loaded { config, warnings }
    }

    /// Client settings derived from the `[api]` table
    pub fn api_client_config(&self) -> ApiClientConfig {
        ApiClientConfig {
            base_url: self.api.base_url.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
        }
    }

    /// Apply overrides from a variable lookup, returning the ones ignored
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut ignored = Vec::new();

        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup(ENV_API_TIMEOUT) {
            match timeout.parse() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => ignored.push(format!("Ignoring invalid {}={:?}", ENV_API_TIMEOUT, timeout)),
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            match format.parse::<LogFormat>() {
                Ok(format) => self.logging.format = format,
                Err(e) => ignored.push(format!("Ignoring {}: {}", ENV_LOG_FORMAT, e)),
            }
        }

        ignored
    }
}

/// Locations searched when no `--config` is given, in order
pub fn default_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("health-monitor").join("config.toml")),
        Some(PathBuf::from("./health-monitor.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Project Health Monitor Configuration
#
# Environment variables override these settings:
# - HEALTH_MONITOR_API_URL
# - HEALTH_MONITOR_API_TIMEOUT
# - HEALTH_MONITOR_LOG_LEVEL
# - HEALTH_MONITOR_LOG_FORMAT

[api]
# Health backend base URL
base_url = "http://localhost:8001"

# Request timeout in seconds
timeout_secs = 10

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
