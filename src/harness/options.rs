//! Generator run options
//!
//! Scenario tests hand the generator a fully resolved [`RunOptions`];
//! individual scenarios describe only what differs from the baseline via
//! [`RunOptionsPatch`]. The baseline always skips dependency installation
//! so test runs stay fast and offline.

use serde::{Deserialize, Serialize};

/// Resolved options for a generator run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Skip installing dependencies after generation
    pub skip_install: bool,
    /// Overwrite files that already exist in the target directory
    pub force: bool,
    /// Bypass the generator's answer cache
    pub skip_cache: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            skip_install: true,
            force: false,
            skip_cache: false,
        }
    }
}

impl RunOptions {
    /// Resolve options from zero or more patches
    ///
    /// Starts from the default and applies each patch in order; later
    /// patches win per field, including over the default. With no patches
    /// the result is exactly [`RunOptions::default`]. Inputs are not
    /// mutated.
    pub fn merged<'a, I>(patches: I) -> Self
    where
        I: IntoIterator<Item = &'a RunOptionsPatch>,
    {
        patches
            .into_iter()
            .fold(Self::default(), |resolved, patch| patch.apply_to(resolved))
    }
}

/// Partial options, as written in a scenario
///
/// Every field is optional; absent fields leave the base value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptionsPatch {
    /// Override for [`RunOptions::skip_install`]
    pub skip_install: Option<bool>,
    /// Override for [`RunOptions::force`]
    pub force: Option<bool>,
    /// Override for [`RunOptions::skip_cache`]
    pub skip_cache: Option<bool>,
}

impl RunOptionsPatch {
    /// Overlay this patch on a base, returning the result
    pub fn apply_to(&self, base: RunOptions) -> RunOptions {
        RunOptions {
            skip_install: self.skip_install.unwrap_or(base.skip_install),
            force: self.force.unwrap_or(base.force),
            skip_cache: self.skip_cache.unwrap_or(base.skip_cache),
        }
    }

    /// True when the patch overrides nothing
    pub fn is_empty(&self) -> bool {
        self.skip_install.is_none() && self.force.is_none() && self.skip_cache.is_none()
    }
}
