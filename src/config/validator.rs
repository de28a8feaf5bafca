//! Rule validation.
//!
//! Catches rules that can never produce a meaningful result before any
//! command runs:
//! - Rules must have a non-empty name and command
//! - The version field must be a parseable range expression

use crate::config::schema::Rule;
use crate::error::{ReliantError, Result};
use crate::version::Range;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Validation rule identifier
    pub check: String,
    /// Human-readable error message
    pub message: String,
    /// Position of the offending rule in the file
    pub index: usize,
}

/// Validate a rule set and return all errors.
///
/// Collects every problem rather than stopping at the first, so a broken
/// rule file can be fixed in one pass.
pub fn validate_rules(rules: &[Rule]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        let label = if rule.name.trim().is_empty() {
            format!("#{}", index + 1)
        } else {
            format!("'{}'", rule.name)
        };

        if rule.name.trim().is_empty() {
            errors.push(ValidationError {
                check: "missing-name".to_string(),
                message: format!("Rule {} has an empty name", label),
                index,
            });
        }

        if rule.cmd.trim().is_empty() {
            errors.push(ValidationError {
                check: "missing-command".to_string(),
                message: format!("Rule {} has an empty command", label),
                index,
            });
        }

        if let Err(e) = Range::parse(&rule.version) {
            errors.push(ValidationError {
                check: "invalid-range".to_string(),
                message: format!("Rule {}: {}", label, e),
                index,
            });
        }
    }

    errors
}

/// Validate a rule set, failing with every message joined.
pub fn validate(rules: &[Rule]) -> Result<()> {
    let errors = validate_rules(rules);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ReliantError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
