//! Rule file schema.
//!
//! A rule file is a JSON array of rules:
//!
//! ```json
//! [
//!   { "name": "Node", "cmd": "node --version", "version": "^20.0.0" },
//!   { "name": "Git", "cmd": "git --version", "version": ">=2.30" }
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// A named check pairing a shell command with a required version range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Display name used in the report.
    pub name: String,

    /// Shell command whose stdout contains the installed version.
    pub cmd: String,

    /// Required version range (e.g. `^1.2.0`).
    pub version: String,
}

impl Rule {
    /// Create a rule.
    pub fn new(name: &str, cmd: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            cmd: cmd.to_string(),
            version: version.to_string(),
        }
    }
}
