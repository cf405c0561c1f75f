//! Configuration management for casedeck.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `casedeck.toml` file
//! 3. User config `~/.config/casedeck/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server connection configuration.
    pub server: ServerConfig,

    /// Spreadsheet export configuration.
    pub export: ExportConfig,

    /// Startup behavior configuration.
    pub startup: StartupConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./casedeck.toml` (project local)
    /// 2. `~/.config/casedeck/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new("casedeck.toml").exists() {
            return Self::from_file("casedeck.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("casedeck").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CASEDECK_SERVER_URL") {
            self.server.base_url = url;
        }
        if let Ok(dir) = std::env::var("CASEDECK_EXPORT_DIR") {
            self.export.output_dir = dir;
        }
        if let Ok(clear) = std::env::var("CASEDECK_CLEAR_ON_START") {
            if let Ok(value) = clear.parse() {
                self.startup.clear_on_start = value;
            }
        }
    }
}

/// Server connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the test-case management server.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

/// Spreadsheet export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported spreadsheets are written to.
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_EXPORT_DIR.to_string(),
        }
    }
}

/// Startup behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Wipe all server-side test cases when the TUI starts.
    ///
    /// This reproduces the original product's clean-slate-per-session
    /// behavior; turn it off to keep previously generated cases around.
    pub clear_on_start: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            clear_on_start: DEFAULT_CLEAR_ON_START,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.base_url, DEFAULT_SERVER_URL);
        assert_eq!(config.export.output_dir, DEFAULT_EXPORT_DIR);
        assert!(config.startup.clear_on_start);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[export]"));
        assert!(toml_str.contains("[startup]"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[server]
base_url = "http://testserver:8080"

[startup]
clear_on_start = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.base_url, "http://testserver:8080");
        assert!(!config.startup.clear_on_start);
        // Unspecified sections keep their defaults
        assert_eq!(config.export.output_dir, DEFAULT_EXPORT_DIR);
    }
}
