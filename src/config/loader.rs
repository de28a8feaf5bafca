//! Rule file discovery and loading.
//!
//! The rule file lives at `<project root>/.reliantrc` unless an explicit
//! path is given. Loading is all-or-nothing: a missing, unreadable,
//! malformed or invalid file is a fatal error and no rule runs.

use crate::config::schema::Rule;
use crate::config::validator::validate;
use crate::error::{ReliantError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default rule file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".reliantrc";

/// Resolve the rule file path.
///
/// An explicit override wins; otherwise `.reliantrc` in `project_root`.
pub fn config_path(project_root: &Path, config_override: Option<&Path>) -> PathBuf {
    match config_override {
        Some(path) => path.to_path_buf(),
        None => project_root.join(CONFIG_FILE_NAME),
    }
}

/// Load a rule file and parse it into rules.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigRead` if it exists but can't be read.
/// Returns `ConfigParseError` if the JSON is invalid.
/// Returns `ConfigValidationError` if a rule is unusable.
pub fn load_rules_file(path: &Path) -> Result<Vec<Rule>> {
    tracing::debug!("Loading rules from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReliantError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReliantError::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let rules = parse_rules(&content, path)?;
    validate(&rules)?;

    tracing::debug!("Loaded {} rule(s)", rules.len());
    Ok(rules)
}

/// Parse JSON content into rules.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_rules(content: &str, source_path: &Path) -> Result<Vec<Rule>> {
    serde_json::from_str(content).map_err(|e| ReliantError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load rules with optional path override.
pub fn load_rules(project_root: &Path, config_override: Option<&Path>) -> Result<Vec<Rule>> {
    load_rules_file(&config_path(project_root, config_override))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RULES: &str = r#"[
        {"name": "Node", "cmd": "echo 1.5.0", "version": "^1.4.0"},
        {"name": "Git", "cmd": "echo 2.0.0", "version": "^1.0.0"}
    ]"#;

    #[test]
    fn config_path_defaults_to_project_rc() {
        let path = config_path(Path::new("/project"), None);
        assert_eq!(path, PathBuf::from("/project/.reliantrc"));
    }

    #[test]
    fn config_path_uses_override() {
        let path = config_path(Path::new("/project"), Some(Path::new("/tmp/rules.json")));
        assert_eq!(path, PathBuf::from("/tmp/rules.json"));
    }

    #[test]
    fn load_rules_file_parses_valid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, RULES).unwrap();

        let rules = load_rules_file(&path).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], Rule::new("Node", "echo 1.5.0", "^1.4.0"));
        assert_eq!(rules[1].name, "Git");
    }

    #[test]
    fn load_rules_preserves_file_order_and_duplicates() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            r#"[
                {"name": "b", "cmd": "echo 1.0.0", "version": "*"},
                {"name": "a", "cmd": "echo 1.0.0", "version": "*"},
                {"name": "b", "cmd": "echo 2.0.0", "version": "*"}
            ]"#,
        )
        .unwrap();

        let rules = load_rules(temp.path(), None).unwrap();
        let names: Vec<_> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn load_rules_file_returns_not_found_error() {
        let result = load_rules_file(Path::new("/nonexistent/.reliantrc"));
        assert!(matches!(result, Err(ReliantError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_rules_file_directory_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = load_rules_file(temp.path());
        assert!(matches!(result, Err(ReliantError::ConfigRead { .. })));
    }

    #[test]
    fn parse_rules_returns_parse_error_for_invalid_json() {
        let result = parse_rules("[{\"name\": ", Path::new(".reliantrc"));
        assert!(matches!(result, Err(ReliantError::ConfigParseError { .. })));
    }

    #[test]
    fn parse_rules_rejects_object_root() {
        let result = parse_rules(
            r#"{"name": "Node", "cmd": "node -v", "version": "*"}"#,
            Path::new(".reliantrc"),
        );
        assert!(matches!(result, Err(ReliantError::ConfigParseError { .. })));
    }

    #[test]
    fn load_rules_file_rejects_invalid_range() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"[{"name": "Node", "cmd": "node -v", "version": "latest"}]"#).unwrap();

        let result = load_rules_file(&path);
        assert!(matches!(
            result,
            Err(ReliantError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn load_rules_file_accepts_empty_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[]").unwrap();

        assert!(load_rules_file(&path).unwrap().is_empty());
    }
}
