//! Shell command execution.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use super::platform::{default_shell, ShellType};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Shell executable (None = platform default).
    pub program: Option<PathBuf>,

    /// Working directory (None = inherit).
    pub cwd: Option<PathBuf>,
}

impl ShellOptions {
    /// Resolve the shell executable to use.
    pub fn program(&self) -> PathBuf {
        self.program.clone().unwrap_or_else(default_shell)
    }
}

/// Execute a command string in a subshell, capturing stdout and stderr.
///
/// The child inherits the parent environment. Returns `Err` only when the
/// shell itself could not be started; a command that runs and exits
/// non-zero is an `Ok` with `success == false`.
pub fn execute(command: &str, options: &ShellOptions) -> io::Result<CommandResult> {
    let start = Instant::now();

    let shell = options.program();
    let flag = ShellType::from_executable(&shell).command_flag();

    let mut cmd = Command::new(&shell);
    cmd.arg(flag);
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output()?;
    let duration = start.elapsed();

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
        success: output.status.success(),
    })
}

/// Strip trailing line terminators (`\n`, `\r\n`, `\r`).
pub fn strip_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}
