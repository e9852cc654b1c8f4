//! Configuration management for the scaffold harness
//!
//! This module provides harness configuration with zero-config defaults,
//! optional loading from a project-local TOML file, and environment
//! variable overrides.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants;
use crate::errors::{ConfigError, ConfigResult};

/// Harness configuration
///
/// Sources are applied in precedence order:
/// 1. Default values
/// 2. Config file (if present)
/// 3. Environment variables
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarnessConfig {
    /// Generator implementation directory; `None` means the crate-relative default
    pub generator_root: Option<PathBuf>,
    /// Keep sandbox directories after a scenario instead of removing them
    pub keep_sandbox: bool,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level for the harness
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: constants::logging::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration, optionally from an explicitly named file
    ///
    /// A missing explicit file is an error; a missing discovered file falls
    /// back to defaults.
    pub fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path });
                }
                Some(path)
            }
            None => Self::find_config_file(),
        };

        if let Some(path) = config_path {
            debug!("loading harness config from: {}", path.display());
            config = Self::load_from_file(&path)?;
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Resolve the generator implementation directory
    ///
    /// Uses the configured override when present, otherwise the default
    /// location relative to this crate's root.
    pub fn generator_root(&self) -> PathBuf {
        match &self.generator_root {
            Some(path) => path.clone(),
            None => PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join(constants::generator::DEFAULT_ROOT),
        }
    }

    /// Find a configuration file in the standard location
    fn find_config_file() -> Option<PathBuf> {
        let path = PathBuf::from(".").join(constants::config::FILE_NAME);
        if path.exists() {
            debug!("found config file: {}", path.display());
            Some(path)
        } else {
            debug!("no config file found, using defaults");
            None
        }
    }

    /// Load configuration from a TOML file
    fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of the loaded values
    fn apply_env_overrides(&mut self) {
        if let Ok(root) = env::var(constants::env::GENERATOR_ROOT) {
            if !root.is_empty() {
                self.generator_root = Some(PathBuf::from(root));
            }
        }

        if let Ok(keep) = env::var(constants::env::KEEP_SANDBOX) {
            self.keep_sandbox = matches!(keep.as_str(), "1" | "true");
        }
    }
}
