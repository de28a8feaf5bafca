//! Command-line interface for reliant.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, ListArgs, ReportFormat};
pub use commands::{Command, CommandDispatcher, CommandResult, GlobalOptions};
