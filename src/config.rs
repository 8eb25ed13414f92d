//! Configuration management
//!
//! Loads and persists the vigilctl configuration file. The config lives at
//! `~/.config/vigilctl/config.toml` and is created with defaults on first
//! run. `VIGILCTL_CONFIG_DIR` overrides the directory, which also keeps
//! integration tests away from the real home directory.

use crate::errors::{AppError, AppResult};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub log: LogConfig,
}

/// Settings for talking to the Vigil REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig {
                endpoint: "https://api.vigil.sh/v2".to_string(),
                api_key: None,
                timeout_secs: Some(30),
            },
            log: LogConfig {
                level: "info".to_string(),
            },
        }
    }
}

/// Loads the configuration on construction and keeps the path it came from
/// so changes can be written back.
pub struct ConfigManager {
    config_path: PathBuf,
    config: Config,
}

impl ConfigManager {
    /// Load the configuration, creating a default file if none exists.
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;
        let config = Self::load_or_create(&config_path)?;
        Ok(ConfigManager {
            config_path,
            config,
        })
    }

    /// Resolve the config file path, creating the directory if needed.
    pub fn config_path() -> AppResult<PathBuf> {
        let base_path = if let Ok(dir) = std::env::var("VIGILCTL_CONFIG_DIR") {
            PathBuf::from(dir)
        } else {
            let base_dirs = BaseDirs::new()
                .ok_or_else(|| AppError::config("Failed to resolve home directory"))?;
            base_dirs.home_dir().join(".config").join("vigilctl")
        };

        fs::create_dir_all(&base_path)
            .map_err(|e| AppError::io_with_source(&base_path, "create config directory", e))?;

        Ok(base_path.join("config.toml"))
    }

    fn load_or_create(path: &Path) -> AppResult<Config> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| AppError::io_with_source(path, "read config file", e))?;
            Ok(toml::from_str(&content)?)
        } else {
            let config = Config::default();
            let content = toml::to_string_pretty(&config)
                .map_err(|e| AppError::config_with_source("Failed to serialize default config", e))?;
            fs::write(path, content)
                .map_err(|e| AppError::io_with_source(path, "write default config", e))?;
            Ok(config)
        }
    }

    /// Write the current configuration back to disk.
    pub fn save(&self) -> AppResult<()> {
        let content = toml::to_string_pretty(&self.config)
            .map_err(|e| AppError::config_with_source("Failed to serialize config", e))?;
        fs::write(&self.config_path, content)
            .map_err(|e| AppError::io_with_source(&self.config_path, "write config file", e))?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}
