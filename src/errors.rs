//! Error types for the scaffold harness
//!
//! This module defines the error taxonomy for the harness. Manifest capture
//! deliberately recovers from its only failure mode (see
//! [`crate::harness::manifest`]); the types here cover the operations that
//! do propagate errors: sandbox setup and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest reading and parsing errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found in the inspected directory
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// JSON parsing error
    #[error("JSON parsing error in manifest")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error reading the manifest
    #[error("I/O error reading manifest")]
    Io(#[from] std::io::Error),
}

/// Sandbox setup and seeding errors
#[derive(Error, Debug)]
pub enum SandboxError {
    /// Scratch directory could not be created
    #[error("failed to create sandbox directory")]
    Create(#[source] std::io::Error),

    /// A seeded file could not be written
    #[error("failed to seed sandbox file: {path}")]
    Seed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A seeded path escapes the sandbox root
    #[error("seed path escapes the sandbox: {path}")]
    PathEscape { path: PathBuf },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly specified configuration file not found
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("failed to read configuration file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),
}

/// Top-level harness error that can represent any error type
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Sandbox error
    #[error(transparent)]
    Sandbox(#[from] SandboxError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic harness error with context
    #[error("harness error: {message}")]
    Generic { message: String },
}

impl HarnessError {
    /// Create a generic harness error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            HarnessError::Manifest(_) => "manifest",
            HarnessError::Sandbox(_) => "sandbox",
            HarnessError::Config(_) => "config",
            HarnessError::Io(_) => "io",
            HarnessError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Manifest result type alias
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Sandbox result type alias
pub type SandboxResult<T> = std::result::Result<T, SandboxError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
