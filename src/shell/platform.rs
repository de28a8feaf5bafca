//! Platform-specific shell selection.

use std::path::{Path, PathBuf};

/// Known shell families, by how they take a command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// POSIX-style shells: `sh -c "<cmd>"`.
    Posix,
    /// `cmd.exe /C "<cmd>"`.
    Cmd,
    /// `powershell -Command "<cmd>"`.
    PowerShell,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &Path) -> Self {
        let name = exe
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "cmd" => ShellType::Cmd,
            "powershell" | "pwsh" => ShellType::PowerShell,
            _ => ShellType::Posix,
        }
    }

    /// Flag that makes the shell run its next argument as a command.
    pub fn command_flag(self) -> &'static str {
        match self {
            ShellType::Posix => "-c",
            ShellType::Cmd => "/C",
            ShellType::PowerShell => "-Command",
        }
    }
}

/// Default subshell for the current platform.
///
/// `%COMSPEC%` (falling back to `cmd.exe`) on Windows, `/bin/sh` elsewhere.
/// The user's login shell is deliberately not used: interactive rc files
/// can print banners that would pollute version output.
pub fn default_shell() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        PathBuf::from("/bin/sh")
    }
}

/// Whether the platform terminal can be trusted to render `✓`/`✗`.
pub fn supports_unicode_glyphs() -> bool {
    !cfg!(target_os = "windows")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_type_from_executable() {
        assert_eq!(
            ShellType::from_executable(Path::new("/bin/sh")),
            ShellType::Posix
        );
        assert_eq!(
            ShellType::from_executable(Path::new("/usr/bin/bash")),
            ShellType::Posix
        );
        assert_eq!(
            ShellType::from_executable(Path::new("cmd.exe")),
            ShellType::Cmd
        );
        assert_eq!(
            ShellType::from_executable(Path::new("pwsh")),
            ShellType::PowerShell
        );
    }

    #[test]
    fn command_flags() {
        assert_eq!(ShellType::Posix.command_flag(), "-c");
        assert_eq!(ShellType::Cmd.command_flag(), "/C");
        assert_eq!(ShellType::PowerShell.command_flag(), "-Command");
    }

    #[test]
    fn default_shell_is_not_empty() {
        assert!(!default_shell().as_os_str().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unix_uses_bin_sh_and_unicode() {
        assert_eq!(default_shell(), PathBuf::from("/bin/sh"));
        assert!(supports_unicode_glyphs());
    }
}
