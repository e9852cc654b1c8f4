//! Package manifest capture
//!
//! After a generator run, scenarios inspect the manifest the generator
//! wrote into the project. Not every scaffold flavor produces one, so the
//! read is best-effort: absence and malformed content both resolve to
//! `None` at the call site instead of an error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants;
use crate::errors::{ManifestError, ManifestResult};

/// The package manifest a generated project carries
///
/// The fields scenarios assert on are typed; everything else the
/// generator writes is preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub keywords: Vec<String>,
    /// Remaining manifest fields, untyped
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PackageManifest {
    /// Assert that the named manifest fields are non-empty strings
    ///
    /// Convenience wrapper over
    /// [`assert_non_empty_strings`](crate::harness::assertions::assert_non_empty_strings).
    pub fn assert_non_empty(&self, fields: &[&str]) {
        let value =
            serde_json::to_value(self).expect("a package manifest serializes to a JSON object");
        crate::harness::assertions::assert_non_empty_strings(&value, fields);
    }
}

/// Per-scenario state shared between setup and assertion phases
///
/// Owned by the test, mutated by [`finish_run`] once the generator is done.
#[derive(Debug, Clone, Default)]
pub struct TestContext {
    /// Manifest captured from the generated project, when one was written
    pub pkg: Option<PackageManifest>,
}

impl TestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }
}

/// Strict manifest load from a directory
///
/// The fallible counterpart of [`read_manifest_in`], for scenarios that
/// assert on the failure itself.
pub fn load_manifest_in(dir: &Path) -> ManifestResult<PackageManifest> {
    let path = dir.join(constants::manifest::FILE_NAME);

    if !path.exists() {
        return Err(ManifestError::NotFound { path });
    }

    let raw = fs::read_to_string(&path)?;
    let manifest = serde_json::from_str(&raw)?;
    Ok(manifest)
}

/// Best-effort manifest read from a directory
///
/// Returns `None` when the file is missing, unreadable, or not valid
/// JSON; the reason is logged, never propagated.
pub fn read_manifest_in(dir: &Path) -> Option<PackageManifest> {
    match load_manifest_in(dir) {
        Ok(manifest) => Some(manifest),
        Err(e @ ManifestError::NotFound { .. }) => {
            debug!("no manifest to capture: {}", e);
            None
        }
        Err(e) => {
            warn!("discarding unusable manifest in {}: {}", dir.display(), e);
            None
        }
    }
}

/// Best-effort manifest read from the current working directory
pub fn read_manifest() -> Option<PackageManifest> {
    read_manifest_in(Path::new("."))
}

/// Record the outcome of a generator run on a test context
///
/// Stores the captured manifest (or `None`) on `context.pkg`, then invokes
/// the completion callback if one was supplied. The callback runs exactly
/// once, on both the found and absent paths.
pub fn finish_run_in<F: FnOnce()>(dir: &Path, context: &mut TestContext, done: Option<F>) {
    context.pkg = read_manifest_in(dir);

    if let Some(done) = done {
        done();
    }
}

/// [`finish_run_in`] against the process current working directory
pub fn finish_run<F: FnOnce()>(context: &mut TestContext, done: Option<F>) {
    finish_run_in(Path::new("."), context, done);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, contents: &str) {
        fs::write(dir.join(constants::manifest::FILE_NAME), contents).unwrap();
    }

    #[test]
    fn read_manifest_parses_typed_and_extra_fields() {
        let dir = TempDir::new().unwrap();
        write_manifest(
            dir.path(),
            r#"{
                "name": "generated-plugin",
                "version": "1.0.0",
                "license": "MIT",
                "keywords": ["plugin"],
                "main": "dist/plugin.cjs.js"
            }"#,
        );

        let manifest = read_manifest_in(dir.path()).unwrap();

        assert_eq!(manifest.name, "generated-plugin");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.license, "MIT");
        assert_eq!(manifest.keywords, vec!["plugin".to_string()]);
        assert_eq!(
            manifest.extra.get("main").and_then(|v| v.as_str()),
            Some("dist/plugin.cjs.js")
        );
        // absent typed fields default to empty
        assert!(manifest.description.is_empty());
    }

    #[test]
    fn read_manifest_is_none_when_file_is_missing() {
        let dir = TempDir::new().unwrap();
        assert!(read_manifest_in(dir.path()).is_none());
    }

    #[test]
    fn read_manifest_is_none_for_malformed_json() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), "{ not json");

        assert!(read_manifest_in(dir.path()).is_none());
    }

    #[test]
    fn load_manifest_distinguishes_absence_from_corruption() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_manifest_in(dir.path()),
            Err(ManifestError::NotFound { .. })
        ));

        write_manifest(dir.path(), "{ not json");
        assert!(matches!(
            load_manifest_in(dir.path()),
            Err(ManifestError::JsonParse(_))
        ));
    }

    #[test]
    fn finish_run_stores_manifest_on_the_context() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"name": "x"}"#);

        let mut ctx = TestContext::new();
        finish_run_in(dir.path(), &mut ctx, None::<fn()>);

        assert_eq!(ctx.pkg.as_ref().map(|pkg| pkg.name.as_str()), Some("x"));
    }

    #[test]
    fn finish_run_stores_none_and_still_calls_done() {
        let dir = TempDir::new().unwrap();

        let calls = Cell::new(0u32);
        let mut ctx = TestContext::new();
        finish_run_in(dir.path(), &mut ctx, Some(|| calls.set(calls.get() + 1)));

        assert!(ctx.pkg.is_none());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn finish_run_replaces_a_previous_capture() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"name": "x"}"#);

        let mut ctx = TestContext::new();
        finish_run_in(dir.path(), &mut ctx, None::<fn()>);
        assert!(ctx.pkg.is_some());

        let empty = TempDir::new().unwrap();
        finish_run_in(empty.path(), &mut ctx, None::<fn()>);
        assert!(ctx.pkg.is_none());
    }
}
