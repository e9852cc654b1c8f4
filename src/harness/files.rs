//! Expected generator output per scaffold flavor
//!
//! The generator emits a fixed set of files for every project plus
//! addenda that depend on the answers given at generation time. The table
//! here is the harness's single source of truth for what a scenario should
//! expect on disk. Paths are relative to the generated project root and
//! slash-separated.

use crate::constants::flavors;

/// Files present in every generated project
pub const COMMON: &[&str] = &[
    "scripts/banner.ejs",
    "scripts/modules.rollup.config.js",
    "scripts/test.rollup.config.js",
    "scripts/umd.rollup.config.js",
    "scripts/version.js",
    "src/plugin.js",
    "test/index.html",
    "test/karma.conf.js",
    "test/plugin.test.js",
    ".babelrc",
    ".editorconfig",
    ".gitignore",
    ".npmignore",
    "jsdoc.json",
    "CHANGELOG.md",
    "CONTRIBUTING.md",
    "index.html",
    "package.json",
    "README.md",
];

/// Addendum for open-source licensed projects
pub const OSS: &[&str] = &[".travis.yml", "LICENSE"];

/// Addendum when documentation tooling is enabled
///
/// Overlaps with the baseline; combining the two flavors must not list
/// the file twice.
pub const DOCS: &[&str] = &["jsdoc.json"];

/// Addendum when the stylesheet prompt is answered yes
pub const SASS: &[&str] = &["src/plugin.scss"];

/// Look up the file list for a single flavor name
///
/// Unknown names resolve to an empty list rather than an error.
pub fn files_for(flavor: &str) -> &'static [&'static str] {
    match flavor {
        flavors::COMMON => COMMON,
        flavors::OSS => OSS,
        flavors::DOCS => DOCS,
        flavors::SASS => SASS,
        _ => &[],
    }
}

/// Ordered union of the named flavors' file lists
///
/// Duplicates are removed, keeping first-seen order.
pub fn file_list<'a, I>(flavors: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut paths = Vec::new();

    for flavor in flavors {
        for path in files_for(flavor) {
            if !paths.contains(path) {
                paths.push(*path);
            }
        }
    }

    paths
}
