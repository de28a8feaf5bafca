//! Rule execution.
//!
//! Runs one rule's command and turns whatever happened into an
//! [`ExecutionResult`]. Nothing here returns an error: a command that
//! cannot start, exits non-zero, or prints garbage is still a result.

use crate::config::Rule;
use crate::shell::{execute as run_shell, strip_trailing_newlines, ShellOptions};
use crate::version::satisfies;

use super::result::{ExecutionResult, VersionCheck};

/// Run a rule's command once and check its output against the rule's range.
pub fn execute(rule: &Rule, shell: &ShellOptions) -> ExecutionResult {
    tracing::debug!("Running rule '{}': {}", rule.name, rule.cmd);

    let (found, error) = match run_shell(&rule.cmd, shell) {
        Ok(output) => {
            tracing::debug!(
                "Rule '{}' exited with {:?} after {:?}",
                rule.name,
                output.exit_code,
                output.duration
            );
            let found = strip_trailing_newlines(&output.stdout).to_string();
            let error = if output.success {
                None
            } else {
                Some(failure_message(&output.stderr, output.exit_code))
            };
            (found, error)
        }
        Err(e) => {
            tracing::debug!("Rule '{}' could not be launched: {}", rule.name, e);
            (
                String::new(),
                Some(format!("could not launch command: {}", e)),
            )
        }
    };

    let pass = error.is_none() && satisfies(&found, &rule.version);

    ExecutionResult {
        name: rule.name.clone(),
        cmd: rule.cmd.clone(),
        version: VersionCheck {
            required: rule.version.clone(),
            found,
        },
        error,
        pass,
    }
}

/// Stripped stderr, or a description of the exit when stderr is empty.
fn failure_message(stderr: &str, exit_code: Option<i32>) -> String {
    let stderr = strip_trailing_newlines(stderr);
    if !stderr.trim().is_empty() {
        return stderr.to_string();
    }
    match exit_code {
        Some(code) => format!("exited with status {}", code),
        None => "terminated by signal".to_string(),
    }
}
