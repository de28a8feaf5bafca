//! Rule execution engine.
//!
//! - [`execute`] - run one rule and capture its result
//! - [`BatchRunner`] - run many rules concurrently, results in rule order
//! - [`Engine`] - run a batch and hand the outcome to a [`Reporter`]
//!
//! # Example
//!
//! ```no_run
//! use reliant::config::Rule;
//! use reliant::engine::{Engine, EngineOptions};
//!
//! let rules = vec![Rule::new("Git", "git --version", ">=2.30")];
//! let engine = Engine::new(EngineOptions::default());
//! let status = engine.check(&rules, &mut std::io::stdout()).unwrap();
//! std::process::exit(status.code() as i32);
//! ```

pub mod batch;
pub mod executor;
pub mod result;

pub use batch::{BatchRunner, FailurePolicy};
pub use executor::execute;
pub use result::{display_found, ExecutionResult, VersionCheck};

use std::io::{self, Write};

use crate::config::Rule;
use crate::report::{ConsoleReporter, ExitStatus, Outcome, Reporter};
use crate::shell::ShellOptions;

/// Engine configuration.
pub struct EngineOptions {
    /// Renders the outcome and picks the exit status.
    pub reporter: Box<dyn Reporter>,

    /// What a failing command does to the batch.
    pub policy: FailurePolicy,

    /// How rule commands are launched.
    pub shell: ShellOptions,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            reporter: Box::new(ConsoleReporter::default()),
            policy: FailurePolicy::default(),
            shell: ShellOptions::default(),
        }
    }
}

impl std::fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("policy", &self.policy)
            .field("shell", &self.shell)
            .finish_non_exhaustive()
    }
}

/// Runs rule sets and reports on them.
#[derive(Debug, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    /// Create an engine.
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Run every rule, report the outcome to `out`, and return the exit status.
    ///
    /// Batch errors (fail-fast aborts, lost workers) are reported through the
    /// reporter's error branch rather than returned; only a failure to write
    /// the report is an `Err`.
    pub fn check(&self, rules: &[Rule], out: &mut dyn Write) -> io::Result<ExitStatus> {
        let runner = BatchRunner::new(self.options.policy).with_shell(self.options.shell.clone());
        let reporter = self.options.reporter.as_ref();

        match runner.run(rules) {
            Ok(results) => {
                let outcome = Outcome::Results(&results);
                reporter.report(outcome, out)?;
                Ok(reporter.exit_status(outcome))
            }
            Err(error) => {
                tracing::debug!("Batch failed: {}", error);
                let outcome = Outcome::Error(&error);
                reporter.report(outcome, out)?;
                Ok(reporter.exit_status(outcome))
            }
        }
    }
}
