//! Scratch directories for generator runs
//!
//! A [`Sandbox`] stands in for the working directory the generator is
//! pointed at during a scenario. It is removed when dropped unless the
//! scenario asks to keep it for post-mortem inspection.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::errors::{SandboxError, SandboxResult};

/// A temporary project directory owned by one scenario
#[derive(Debug)]
pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    /// Create a fresh scratch directory
    pub fn new() -> SandboxResult<Self> {
        let root = TempDir::new().map_err(SandboxError::Create)?;
        debug!("created sandbox at {}", root.path().display());
        Ok(Self { root })
    }

    /// Root of the sandbox
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of a file inside the sandbox
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.path().join(rel)
    }

    /// Write a file into the sandbox, creating parent directories
    ///
    /// `rel` must stay inside the sandbox root; absolute paths and `..`
    /// components are rejected.
    pub fn seed_file(&self, rel: impl AsRef<Path>, contents: &str) -> SandboxResult<PathBuf> {
        let rel = rel.as_ref();

        if rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(SandboxError::PathEscape {
                path: rel.to_path_buf(),
            });
        }

        let path = self.root.path().join(rel);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SandboxError::Seed {
                path: path.clone(),
                source,
            })?;
        }

        fs::write(&path, contents).map_err(|source| SandboxError::Seed {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Keep the directory on disk and return its path
    ///
    /// Disables cleanup; useful with the `keep_sandbox` configuration flag
    /// when a failing scenario needs inspecting.
    pub fn into_path(self) -> PathBuf {
        let path = self.root.keep();
        debug!("keeping sandbox at {}", path.display());
        path
    }
}
