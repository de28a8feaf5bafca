//! Version matching for rule output.
//!
//! Tool output is free-form text ("git version 2.39.2", "v20.11.1\n"), so
//! matching happens in two stages:
//!
//! 1. [`coerce`] pulls the first version-like token out of the text
//! 2. [`Range`] decides whether that version falls inside the required
//!    range expression (`^1.2.0`, `>=1.4 <2`, `1.x || 2.1.0 - 2.3`)
//!
//! [`satisfies`] combines both and never fails: unparseable output or an
//! unparseable range simply does not match.
//!
//! # Example
//!
//! ```
//! use reliant::version::satisfies;
//!
//! assert!(satisfies("1.2.3", "^1.2.0"));
//! assert!(satisfies("git version 2.39.2\n", ">=2.30"));
//! assert!(!satisfies("2.0.0", "^1.2.0"));
//! assert!(!satisfies("command not found", "*"));
//! ```

/// Compile a regex once, on first use.
macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: std::sync::LazyLock<regex::Regex> =
            std::sync::LazyLock::new(|| regex::Regex::new($pattern).unwrap());
    };
}

mod coerce;
mod range;

pub use coerce::coerce;
pub use range::Range;

use thiserror::Error;

/// Errors produced while parsing a range expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The range expression (or one of its comparators) is malformed.
    #[error("invalid version range '{range}': {reason}")]
    InvalidRange { range: String, reason: String },
}

/// Check whether `found` contains a version satisfying `required`.
pub fn satisfies(found: &str, required: &str) -> bool {
    let range = match Range::parse(required) {
        Ok(range) => range,
        Err(e) => {
            tracing::debug!("{}", e);
            return false;
        }
    };

    match coerce(found) {
        Some(version) => range.matches(&version),
        None => {
            tracing::debug!("no version found in output {:?}", found);
            false
        }
    }
}
