//! Test-support harness for the scaffolding generator
//!
//! This module holds the pieces a scenario needs around a generator run:
//! the expected-output table, run options, manifest capture, a scratch
//! working directory, and assertion helpers.
//!
//! # Module Organization
//!
//! - [`files`] - Expected output files per scaffold flavor and the union resolver
//! - [`options`] - Typed generator run options and patch merging
//! - [`manifest`] - Package manifest model, best-effort capture, test context
//! - [`sandbox`] - Scratch directory standing in for the generator's working directory
//! - [`assertions`] - Assertion helpers used by scenario tests
//!
//! # Examples
//!
//! ```rust,no_run
//! use scaffold_harness::harness::{file_list, finish_run_in, RunOptions, Sandbox, TestContext};
//! use scaffold_harness::harness::assertions::assert_files_exist;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sandbox = Sandbox::new()?;
//! let options = RunOptions::default();
//!
//! // ... run the generator in sandbox.path() with `options` ...
//!
//! let mut ctx = TestContext::new();
//! finish_run_in(sandbox.path(), &mut ctx, None::<fn()>);
//!
//! assert_files_exist(sandbox.path(), &file_list(["common", "oss"]));
//! # Ok(())
//! # }
//! ```

pub mod assertions;
pub mod files;
pub mod manifest;
pub mod options;
pub mod sandbox;

#[cfg(test)]
pub mod tests;

// Re-export the main public API
pub use assertions::{assert_files_exist, assert_non_empty_strings};
pub use files::{file_list, files_for};
pub use manifest::{
    finish_run, finish_run_in, load_manifest_in, read_manifest, read_manifest_in,
    PackageManifest, TestContext,
};
pub use options::{RunOptions, RunOptionsPatch};
pub use sandbox::Sandbox;
