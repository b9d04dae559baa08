//! Configuration module for the gcat CLI.
//!
//! Loads `gcat.toml`, which supplies defaults that command-line flags
//! override.

use dirs::{config_dir, home_dir};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{GcatError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "gcat.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Init-specific configuration.
    #[serde(default)]
    pub init: InitConfig,

    /// Lex-specific configuration.
    #[serde(default)]
    pub lex: LexConfig,
}

/// Init-specific configuration options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct InitConfig {
    /// Branch new repositories point `HEAD` at.
    #[serde(default)]
    pub default_branch: Option<String>,
}

/// Lex-specific configuration options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Default token output format (`text` or `json`).
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/gcat/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GcatError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| GcatError::Config(format!("Failed to parse configuration: {}", e)))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("gcat").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("gcat").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
