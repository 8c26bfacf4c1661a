//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::http::{BaseUrl, DEFAULT_API_PORT};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend location
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Origin the client is served from, e.g. `https://nexus.example`
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Port used when `origin` names none
    #[serde(default = "default_api_port")]
    pub default_port: u16,
}

fn default_origin() -> String {
    "http://localhost".to_string()
}

fn default_api_port() -> u16 {
    DEFAULT_API_PORT
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            default_port: default_api_port(),
        }
    }
}

/// Where the CLI keeps its session between runs
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_path")]
    pub path: String,
}

fn default_session_path() -> String {
    dirs::config_dir()
        .map(|p| p.join("nexus").join("session.toml").to_string_lossy().to_string())
        .unwrap_or_else(|| "./nexus_session.toml".to_string())
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
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

    /// Load a file and apply environment overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let config = Self::load(path)?;
        Ok(Self::with_env(config, ConfigSource::File(path.to_path_buf())))
    }

    /// Load from default locations, falling back to defaults plus environment
    pub fn load_default() -> LoadedConfig {
        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("nexus").join("config.toml")),
            Some(PathBuf::from("./nexus.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&candidates)
    }

    fn load_first(candidates: &[PathBuf]) -> LoadedConfig {
        let mut warnings = Vec::new();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    let mut loaded = Self::with_env(config, ConfigSource::File(path.clone()));
                    warnings.append(&mut loaded.warnings);
                    loaded.warnings = warnings;
                    return loaded;
                }
                Err(e) => warnings.push(format!("Failed to load config from {:?}: {}", path, e)),
            }
        }

        let mut loaded = Self::with_env(Config::default(), ConfigSource::Defaults);
        warnings.append(&mut loaded.warnings);
        loaded.warnings = warnings;
        loaded
    }

    fn with_env(mut config: Config, source: ConfigSource) -> LoadedConfig {
        let warnings = config.apply_env_overrides();
        LoadedConfig {
            config,
            source,
            warnings,
        }
    }

    /// The API base every request is resolved against
    pub fn base_url(&self) -> Result<BaseUrl, ConfigError> {
        BaseUrl::parse_origin(&self.api.origin, self.api.default_port)
            .ok_or_else(|| ConfigError::InvalidOrigin(self.api.origin.clone()))
    }

    /// Apply environment variable overrides; returns what was ignored
    fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(origin) = lookup("NEXUS_API_ORIGIN") {
            self.api.origin = origin;
        }
        if let Some(port) = lookup("NEXUS_API_DEFAULT_PORT") {
            match port.parse() {
                Ok(p) => self.api.default_port = p,
                Err(_) => warnings.push(format!("Ignoring invalid NEXUS_API_DEFAULT_PORT {:?}", port)),
            }
        }
        if let Some(path) = lookup("NEXUS_SESSION_PATH") {
            self.session.path = path;
        }
        if let Some(level) = lookup("NEXUS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("NEXUS_LOG_FORMAT") {
            self.logging.format = format;
        }
        warnings
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// A configuration plus what happened while loading it.
///
/// Loading runs before logging is set up, so the report is kept and
/// written out with [`LoadedConfig::log`] once a subscriber exists.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match &self.source {
            ConfigSource::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigSource::Defaults => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid API origin {0:?}: expected scheme://host[:port]")]
    InvalidOrigin(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Nexus Configuration
#
# Environment variables override these settings:
# - NEXUS_API_ORIGIN
# - NEXUS_API_DEFAULT_PORT
# - NEXUS_SESSION_PATH
# - NEXUS_LOG_LEVEL
# - NEXUS_LOG_FORMAT

[api]
# Origin of the Business Nexus site
origin = "http://localhost"

# Port used when the origin does not name one
default_port = 8000

[session]
# File holding the signed-in token, role and username
path = "~/.config/nexus/session.toml"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
