//! Server configuration parsing.

use serde::Deserialize;
use std::path::Path;

/// Server configuration loaded from TOML file.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Server settings.
    pub server: ServerConfig,
    /// Data store settings. Absent means no persistence is configured and
    /// the services run in fallback mode.
    pub store: Option<StoreConfig>,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// CORS settings.
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Server bind settings.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1" or "0.0.0.0").
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding the built game UI, served as static files.
    pub static_path: Option<String>,
}

/// Data store configuration.
#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    /// Path to the store directory.
    pub path: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log filter (e.g. "info" or "nanoword=debug").
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// "stdout", "stderr", or a file path.
    pub output: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            output: "stderr".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// CORS configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CorsConfig {
    /// Whether cross-origin requests are allowed at all.
    pub enabled: bool,
    /// Allowed origins; "*" allows any.
    pub allow_origins: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Get the socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String, std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config file '{}': {}", path, e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
