#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! busgen Configuration
//!
//! This crate provides configuration management for busgen. It handles
//! loading, saving, and managing configuration files that specify:
//! - The target output language's generator knobs (indent width, default
//!   out-of-memory escape block)
//! - Logging configuration
//!
//! Configuration is stored in TOML format and can be loaded from files or
//! created with sensible defaults for development and testing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory.
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Code generation settings.
    pub codegen: CodegenConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Code generation configuration: the knobs that shape emitted text
/// without changing the generator's semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Number of spaces per indentation level in emitted code.
    pub indent_width: usize,
    /// Out-of-memory escape block inlined at every fallible call site when
    /// the caller doesn't supply its own.
    pub default_oom_block: String,
    /// Name of the target output language, for diagnostics only — the
    /// generator itself is not bound to a single target (`spec.md` §1).
    pub target_language: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Config {
    /// Load configuration from a TOML file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path: `{config_dir()}/busgen/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("busgen");
        Ok(config_dir.join("config.toml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            codegen: CodegenConfig {
                indent_width: 2,
                default_oom_block: "return -1;\n".to_string(),
                target_language: "c".to_string(),
            },
            logging: LoggingConfig { level: "info".to_string() },
        }
    }
}
