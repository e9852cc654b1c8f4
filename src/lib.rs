//! Scaffold Harness Library
//!
//! Test-support utilities for the plugin project scaffolding generator.
//! Provides the expected-output file tables, run option merging, package
//! manifest capture, and the assertion helpers used by the generator's
//! scenario tests.

pub mod config;
pub mod constants;
pub mod errors;
pub mod harness;
pub mod logging;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{HarnessError, Result};
