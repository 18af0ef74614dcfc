//! Configuration module for bins-analyzer
//!
//! This module handles persistent application configuration:
//! - Default log representation and interface language
//! - Error thresholds used when reporting summaries
//! - Recently analyzed sources
//!
//! # App Data Location
//!
//! Configuration is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.bins-analyzer/`
//! - **macOS**: `~/Library/Application Support/dev.bins-analyzer/`
//! - **Windows**: `%APPDATA%\dev.bins-analyzer\`
//!
//! # Files
//!
//! - `config.toml` - Application configuration
//! - `logs/` - Rolling log files written by the CLI

pub mod settings;

pub use settings::*;

use crate::error::{BinsError, Result};
use crate::i18n::Language;
use crate::types::Representation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.bins-analyzer";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Maximum number of recent sources to remember
pub const MAX_RECENT_SOURCES: usize = 10;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        BinsError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            BinsError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(CONFIG_FILE))
}

// ==================== Recent Source Entry ====================

/// A recently analyzed file or directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSource {
    pub path: PathBuf,

    /// Representation the source was read as
    pub representation: Representation,

    pub last_opened: DateTime<Utc>,
}

impl RecentSource {
    pub fn new(path: impl Into<PathBuf>, representation: Representation) -> Self {
        Self {
            path: path.into(),
            representation,
            last_opened: Utc::now(),
        }
    }

    /// Check if the source still exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

// ==================== App Config ====================

/// Persistent application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version for future migration support
    #[serde(default = "default_config_version")]
    pub version: u32,

    /// Representation used when scanning directories
    #[serde(default)]
    pub representation: Representation,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub thresholds: ErrorThresholds,

    /// Most recent first
    #[serde(default)]
    pub recent_sources: Vec<RecentSource>,
}

fn default_config_version() -> u32 {
    1
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            representation: Representation::default(),
            language: Language::default(),
            thresholds: ErrorThresholds::default(),
            recent_sources: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let path = config_path()
            .ok_or_else(|| BinsError::Config("Could not determine config path".to_string()))?;

        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BinsError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        toml::from_str(&content).map_err(|e| {
            BinsError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(CONFIG_FILE))
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| BinsError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            BinsError::Config(format!("Failed to write config file {:?}: {}", path, e))
        })
    }

    /// Add or refresh a recent source
    pub fn add_recent_source(&mut self, path: impl AsRef<Path>, representation: Representation) {
        let path = path.as_ref().to_path_buf();

        // Remove existing entry for this path
        self.recent_sources.retain(|s| s.path != path);

        self.recent_sources
            .insert(0, RecentSource::new(path, representation));
        self.recent_sources.truncate(MAX_RECENT_SOURCES);
    }

    /// Drop recent sources that no longer exist
    pub fn cleanup_missing_sources(&mut self) {
        self.recent_sources.retain(|s| s.exists());
    }
}
