//! Store configuration
//!
//! Decides where the record file lives and how it is written. The default
//! puts `scouting_records.json` under the platform data directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default file name for the record array
pub const DEFAULT_FILE_NAME: &str = "scouting_records.json";

/// Directory created under the platform data directory
pub const APP_DIR_NAME: &str = "robot-scout";

/// Where and how the record file is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the record file; platform data dir when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// File name inside `data_dir`
    pub file_name: String,
    /// Write indented JSON
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            pretty: true,
        }
    }
}

impl StoreConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration rooted at an explicit directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.file_name.trim();
        if name.is_empty() || name == "." || name == ".." {
            return Err(ConfigError::InvalidFileName(self.file_name.clone()));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ConfigError::InvalidFileName(self.file_name.clone()));
        }
        Ok(())
    }

    /// Full path of the record file
    pub fn resolve_path(&self) -> Result<PathBuf, ConfigError> {
        self.validate()?;
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR_NAME))
                .ok_or(ConfigError::NoDataDir)?,
        };
        Ok(dir.join(&self.file_name))
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No platform data directory and no explicit `data_dir`
    #[error("No data directory available; set data_dir explicitly")]
    NoDataDir,

    /// File name is empty or contains path separators
    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
