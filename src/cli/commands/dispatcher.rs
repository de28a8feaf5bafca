//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit rule file path.
    pub config: Option<PathBuf>,

    /// Use ASCII status labels.
    pub ascii: bool,
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    options: GlobalOptions,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, options: GlobalOptions) -> Self {
        Self {
            project_root,
            options,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand means `check` with default arguments.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => self.check(args.clone(), out),
            Some(Commands::List(args)) => {
                let cmd =
                    super::list::ListCommand::new(&self.project_root, &self.options, args.clone());
                cmd.execute(out)
            }
            None => self.check(CheckArgs::default(), out),
        }
    }

    fn check(&self, args: CheckArgs, out: &mut dyn Write) -> Result<CommandResult> {
        let cmd = super::check::CheckCommand::new(&self.project_root, &self.options, args);
        cmd.execute(out)
    }
}
