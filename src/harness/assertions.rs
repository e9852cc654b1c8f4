//! Assertion helpers for scenario tests
//!
//! These helpers panic on failure, which is the test-failure signal of the
//! surrounding `cargo test` harness: the current scenario stops, the rest
//! of the suite keeps running.

use std::path::Path;

use serde_json::Value;

/// Assert that every named field of a JSON object is a non-empty string
///
/// Non-empty means at least one non-whitespace character. A missing field,
/// a non-string value, and a blank string all fail, naming the offending
/// field.
pub fn assert_non_empty_strings(value: &Value, fields: &[&str]) {
    for field in fields {
        let ok = value
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| s.chars().any(|c| !c.is_whitespace()));

        assert!(
            ok,
            "expected \"{}\" to be a non-empty string, got {:?}",
            field,
            value.get(*field)
        );
    }
}

/// Assert that every relative path exists under a root directory
///
/// This is the consumer of [`file_list`](crate::harness::files::file_list)
/// output after a generator run.
pub fn assert_files_exist<P: AsRef<Path>>(root: P, paths: &[&str]) {
    let root = root.as_ref();

    for rel in paths {
        assert!(
            root.join(rel).exists(),
            "missing expected file: {} (under {})",
            rel,
            root.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn non_empty_string_passes() {
        let value = json!({"title": "Hello"});
        assert_non_empty_strings(&value, &["title"]);
    }

    #[test]
    fn several_fields_are_checked() {
        let value = json!({"name": "plugin", "version": "1.0.0", "license": "MIT"});
        assert_non_empty_strings(&value, &["name", "version", "license"]);
    }

    #[test]
    #[should_panic(expected = "\"title\"")]
    fn empty_string_fails() {
        let value = json!({"title": ""});
        assert_non_empty_strings(&value, &["title"]);
    }

    #[test]
    #[should_panic(expected = "\"title\"")]
    fn whitespace_only_string_fails() {
        let value = json!({"title": "   "});
        assert_non_empty_strings(&value, &["title"]);
    }

    #[test]
    #[should_panic(expected = "\"title\"")]
    fn missing_field_fails() {
        let value = json!({});
        assert_non_empty_strings(&value, &["title"]);
    }

    #[test]
    #[should_panic(expected = "\"count\"")]
    fn non_string_value_fails() {
        let value = json!({"count": 3});
        assert_non_empty_strings(&value, &["count"]);
    }

    #[test]
    fn files_exist_passes_for_present_files() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/plugin.js"), "").unwrap();
        std::fs::write(dir.path().join("README.md"), "").unwrap();

        assert_files_exist(dir.path(), &["src/plugin.js", "README.md"]);
    }

    #[test]
    #[should_panic(expected = "missing expected file: LICENSE")]
    fn files_exist_names_the_missing_path() {
        let dir = TempDir::new().unwrap();
        assert_files_exist(dir.path(), &["LICENSE"]);
    }
}
