//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{execute, strip_trailing_newlines, CommandResult, ShellOptions};
pub use platform::{default_shell, supports_unicode_glyphs, ShellType};
