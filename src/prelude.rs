//! Prelude module for the Scaffold Harness Library
//!
//! Re-exports the items a scenario test typically needs, so a suite can
//! start with a single `use scaffold_harness::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use scaffold_harness::prelude::*;
//!
//! # fn main() -> Result<()> {
//! logging::init();
//!
//! let sandbox = Sandbox::new()?;
//! let options = RunOptions::default();
//!
//! // ... run the generator in sandbox.path() with `options` ...
//!
//! let mut ctx = TestContext::new();
//! finish_run_in(sandbox.path(), &mut ctx, None::<fn()>);
//! assert_files_exist(sandbox.path(), &file_list(["common"]));
//! # Ok(())
//! # }
//! ```

// Core result types
pub use crate::errors::{HarnessError, Result};

// Harness components used in most scenarios
pub use crate::harness::{
    assert_files_exist, assert_non_empty_strings, file_list, files_for, finish_run,
    finish_run_in, load_manifest_in, read_manifest, read_manifest_in, PackageManifest,
    RunOptions, RunOptionsPatch, Sandbox, TestContext,
};

// Configuration and logging
pub use crate::config::HarnessConfig;
pub use crate::logging;

// Commonly used constants
pub use crate::constants::{CONFIG_FILE_NAME, GENERATOR_DEFAULT_ROOT, MANIFEST_FILE_NAME};

// Standard library re-exports that are commonly needed
pub use std::path::{Path, PathBuf};
