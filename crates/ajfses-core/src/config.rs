//! Configuration management for ajfses.
//!
//! Loads configuration from ${AJFSES_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for ajfses configuration and data directories.
    //!
    //! AJFSES_HOME resolution order:
    //! 1. AJFSES_HOME environment variable (if set)
    //! 2. ~/.config/ajfses (default)

    use std::path::PathBuf;

    /// Returns the ajfses home directory.
    ///
    /// Checks AJFSES_HOME env var first, falls back to ~/.config/ajfses.
    /// Without a home directory the current directory is used.
    pub fn ajfses_home() -> PathBuf {
        if let Ok(home) = std::env::var("AJFSES_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("ajfses"))
            .unwrap_or_else(|| PathBuf::from(".ajfses"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        ajfses_home().join("config.toml")
    }

    /// Returns the path backing the persistent storage scope.
    pub fn storage_path() -> PathBuf {
        ajfses_home().join("storage.json")
    }

    /// Returns the directory that receives log files.
    pub fn logs_dir() -> PathBuf {
        ajfses_home().join("logs")
    }
}

/// API endpoint selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL for development hosts.
    pub dev_url: String,
    /// Base URL for every other host.
    pub prod_url: String,
    /// Hostnames that select `dev_url`.
    pub dev_hosts: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            dev_url: "http://localhost:8080/api/v1".to_string(),
            prod_url: "https://ajfses-api.pssoft.xyz/api/v1".to_string(),
            dev_hosts: vec![
                String::new(),
                "localhost".to_string(),
                "127.0.0.1".to_string(),
            ],
        }
    }
}

/// Status overlay timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub enter_delay_ms: u64,
    pub exit_duration_ms: u64,
    pub transition_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            exit_duration_ms: 300,
            transition_ms: 300,
        }
    }
}

impl OverlayConfig {
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Header logo crossfade configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub fade_half_step_ms: u64,
    pub normal_asset: String,
    pub circle_asset: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            fade_half_step_ms: 100,
            normal_asset: "img/logo.png".to_string(),
            circle_asset: "img/logo-circle.png".to_string(),
        }
    }
}

impl LogoConfig {
    pub fn fade_half_step(&self) -> Duration {
        Duration::from_millis(self.fade_half_step_ms)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default `EnvFilter` directive, overridden by `AJFSES_LOG`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub overlay: OverlayConfig,
    pub logo: LogoConfig,
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
