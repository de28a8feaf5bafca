//! Per-rule execution results.

use serde::Serialize;

/// Required versus found version for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    /// The rule's range expression.
    pub required: String,
    /// The command's stdout, trailing line terminators stripped.
    pub found: String,
}

/// Outcome of running one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Rule name.
    pub name: String,

    /// Command that was run.
    pub cmd: String,

    /// Required and found versions.
    pub version: VersionCheck,

    /// Set when the command exited non-zero or could not be launched.
    pub error: Option<String>,

    /// Whether the rule passed. Always false when `error` is set.
    pub pass: bool,
}

/// Text shown for a found version; empty output reads as "nothing".
pub fn display_found(found: &str) -> &str {
    if found.trim().is_empty() {
        "nothing"
    } else {
        found
    }
}
