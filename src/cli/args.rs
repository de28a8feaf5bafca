//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// reliant - Verify your environment against declarative version rules.
#[derive(Debug, Parser)]
#[command(name = "reliant")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to rule file (overrides default .reliantrc)
    #[arg(short, long, global = true, env = "RELIANT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use [ok]/[FAIL] labels instead of ✓/✗
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every rule and report (default if no command specified)
    Check(CheckArgs),

    /// Show the loaded rules without running them
    List(ListArgs),
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    #[default]
    Human,
    /// Machine-readable JSON
    Json,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Abort on the first command that fails to run
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["reliant"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn check_flags_parse() {
        let cli = Cli::parse_from(["reliant", "check", "--fail-fast", "--format", "json"]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert!(args.fail_fast);
                assert_eq!(args.format, ReportFormat::Json);
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["reliant", "list", "--config", "rules.json", "--no-color"]);
        assert_eq!(cli.config, Some(PathBuf::from("rules.json")));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn check_args_default_to_human_fail_soft() {
        let args = CheckArgs::default();
        assert!(!args.fail_fast);
        assert_eq!(args.format, ReportFormat::Human);
    }
}
