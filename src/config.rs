//! Configuration management for todo-store
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, BACKEND_QUERY, BACKEND_SQL, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DATABASE_NAME,
    DEFAULT_LOG_LEVEL, XDG_CONFIG_FILE_NAME,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Which storage engine drives the `todo` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Hand-written parameterized SQL statements
    #[default]
    Sql,
    /// Typed entity query builder
    Query,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database name; the file is `<directory>/<name>.db`
    pub name: String,
    /// Directory holding the database file (defaults to the platform data dir)
    pub directory: Option<PathBuf>,
    /// Keep the database in memory for the lifetime of the process
    pub in_memory: bool,
    /// Storage engine
    pub backend: BackendKind,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level written: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file path (defaults to the platform data dir)
    pub file: Option<PathBuf>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DATABASE_NAME.to_string(),
            directory: None,
            in_memory: false,
            backend: BackendKind::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Sql => BACKEND_SQL,
            BackendKind::Query => BACKEND_QUERY,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DatabaseConfig {
    /// In-memory database with the given name, mostly useful in tests
    pub fn in_memory(name: impl Into<String>, backend: BackendKind) -> Self {
        Self {
            name: name.into(),
            directory: None,
            in_memory: true,
            backend,
        }
    }

    /// On-disk database with the given name inside `directory`
    pub fn on_disk(name: impl Into<String>, directory: impl Into<PathBuf>, backend: BackendKind) -> Self {
        Self {
            name: name.into(),
            directory: Some(directory.into()),
            in_memory: false,
            backend,
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join(XDG_CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let name = self.database.name.trim();
        if name.is_empty() {
            anyhow::bail!("database.name cannot be empty");
        }
        if name.contains(['/', '\\']) {
            anyhow::bail!("database.name must not contain path separators, got '{}'", self.database.name);
        }

        if self.database.in_memory && self.database.directory.is_some() {
            anyhow::bail!("database.directory has no effect when database.in_memory is set");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# todo-store Configuration File\n# Generated on {}\n\n",
            datetime::format_millis(datetime::now_millis())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(XDG_CONFIG_FILE_NAME))
    }
}
