//! Result reporting.
//!
//! A [`Reporter`] turns the outcome of a batch into output and decides the
//! process exit status. Two reporters ship with the crate:
//!
//! - [`ConsoleReporter`] - the human-readable report (default)
//! - [`JsonReporter`] - a machine-readable document for tooling
//!
//! Any other type implementing [`Reporter`] can be handed to the engine
//! through [`EngineOptions`](crate::engine::EngineOptions).

pub mod console;
pub mod json;
pub mod summary;

use std::io::{self, Write};

use crate::engine::ExecutionResult;
use crate::error::ReliantError;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use summary::{pluralise, Counts, Issue, IssueDetail, Report, SummaryEntry};

/// What a batch produced: results, or the error that stopped it.
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    /// Every rule's result, in rule order.
    Results(&'a [ExecutionResult]),
    /// A top-level error; no pass/fail accounting happens.
    Error(&'a ReliantError),
}

impl Outcome<'_> {
    /// Whether this is the error branch.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Exit status implied by the outcome.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Outcome::Results(results) if results.iter().all(|r| r.pass) => ExitStatus::Success,
            _ => ExitStatus::Failure,
        }
    }
}

/// Process exit status of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every rule passed.
    Success,
    /// A rule failed or the run could not complete.
    Failure,
}

impl ExitStatus {
    /// Numeric exit code.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }

    /// Whether this is success.
    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

/// Trait for rendering a batch outcome.
pub trait Reporter: Send + Sync {
    /// Render the outcome to `out`.
    fn report(&self, outcome: Outcome<'_>, out: &mut dyn Write) -> io::Result<()>;

    /// Decide the process exit status.
    fn exit_status(&self, outcome: Outcome<'_>) -> ExitStatus {
        outcome.exit_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::VersionCheck;

    fn result(pass: bool) -> ExecutionResult {
        ExecutionResult {
            name: "Node".to_string(),
            cmd: "node -v".to_string(),
            version: VersionCheck {
                required: "^1.0.0".to_string(),
                found: "1.0.0".to_string(),
            },
            error: None,
            pass,
        }
    }

    #[test]
    fn all_passing_is_success() {
        let results = vec![result(true), result(true)];
        assert_eq!(Outcome::Results(&results).exit_status(), ExitStatus::Success);
    }

    #[test]
    fn no_rules_is_success() {
        assert_eq!(Outcome::Results(&[]).exit_status(), ExitStatus::Success);
    }

    #[test]
    fn any_failure_is_failure() {
        let results = vec![result(true), result(false)];
        assert_eq!(Outcome::Results(&results).exit_status(), ExitStatus::Failure);
    }

    #[test]
    fn error_is_failure() {
        let err = ReliantError::RuleLaunch {
            rule: "Git".into(),
            message: "not found".into(),
        };
        let outcome = Outcome::Error(&err);
        assert!(outcome.is_error());
        assert_eq!(outcome.exit_status(), ExitStatus::Failure);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
        assert!(ExitStatus::Success.is_success());
    }

    struct AlwaysFine;

    impl Reporter for AlwaysFine {
        fn report(&self, _outcome: Outcome<'_>, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "fine")
        }

        fn exit_status(&self, _outcome: Outcome<'_>) -> ExitStatus {
            ExitStatus::Success
        }
    }

    #[test]
    fn reporters_can_override_exit_status() {
        let results = vec![result(false)];
        let reporter: Box<dyn Reporter> = Box::new(AlwaysFine);
        let mut out = Vec::new();

        reporter.report(Outcome::Results(&results), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "fine\n");
        assert_eq!(
            reporter.exit_status(Outcome::Results(&results)),
            ExitStatus::Success
        );
    }
}
