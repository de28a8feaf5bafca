//! reliant - Verify a development environment against declarative rules.
//!
//! A rule names a shell command and the semver range its output must
//! satisfy. reliant reads the rules from a `.reliantrc` JSON file, runs
//! every command concurrently and reports which ones fell short.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Rule file loading, parsing, and validation
//! - [`engine`] - Concurrent rule execution
//! - [`error`] - Error types and result aliases
//! - [`report`] - Console and JSON reporters
//! - [`shell`] - Shell command execution
//! - [`ui`] - Theme and status glyphs
//! - [`version`] - Version coercion and range matching
//!
//! # Example
//!
//! ```
//! use reliant::version::satisfies;
//!
//! assert!(satisfies("git version 2.39.2", ">=2.30 <3"));
//! assert!(!satisfies("v16.20.0", "^18.0.0"));
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{ReliantError, Result};
