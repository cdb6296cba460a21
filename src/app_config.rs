//! Application configuration module
//!
//! Loads and validates the settings that control how supported-languages
//! responses are displayed.

use anyhow::{Context, Result};
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::response::NameStyle;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Language the CLI checks for in a parsed listing (ISO)
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,

    /// Parser config
    #[serde(default)]
    pub parser: ParserConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for turning a response into a language list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParserConfig {
    /// Fill in missing language names from the ISO 639 tables
    #[serde(default = "default_true")]
    pub resolve_names: bool,

    /// Which name table to use when resolving names
    #[serde(default)]
    pub name_style: NameStyle,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            resolve_names: default_true(),
            name_style: NameStyle::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_fallback_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        crate::language_utils::validate_language_code(&self.fallback_language)
            .context("Invalid fallback_language")?;
        Ok(())
    }

    /// Load the configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the configuration, or use defaults when the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', using default config.", path.display());
        Ok(Self::default())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            fallback_language: default_fallback_language(),
            parser: ParserConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
