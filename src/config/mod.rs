//! Rule file loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use reliant::config::load_rules;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".reliantrc"),
//!     r#"[{"name": "Git", "cmd": "git --version", "version": ">=2"}]"#,
//! )
//! .unwrap();
//!
//! let rules = load_rules(temp.path(), None).unwrap();
//! assert_eq!(rules[0].name, "Git");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    config_path, load_rules, load_rules_file, parse_rules, CONFIG_FILE_NAME,
};
pub use schema::Rule;
pub use validator::{validate, validate_rules, ValidationError};
