//! Check command implementation.
//!
//! The `reliant check` command loads the rule file, runs every rule
//! concurrently and prints the report.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, ReportFormat};
use crate::config::{config_path, load_rules_file};
use crate::engine::{Engine, EngineOptions, FailurePolicy};
use crate::error::Result;
use crate::report::{ConsoleReporter, JsonReporter, Reporter};
use crate::shell::{supports_unicode_glyphs, ShellOptions};
use crate::ui::should_use_colors;

use super::dispatcher::{Command, CommandResult, GlobalOptions};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    ascii: bool,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, options: &GlobalOptions, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: options.config.clone(),
            ascii: options.ascii,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn reporter(&self) -> Box<dyn Reporter> {
        match self.args.format {
            ReportFormat::Human => Box::new(ConsoleReporter::new(
                should_use_colors(),
                self.ascii || !supports_unicode_glyphs(),
            )),
            ReportFormat::Json => Box::new(JsonReporter::new()),
        }
    }

    fn policy(&self) -> FailurePolicy {
        if self.args.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::FailSoft
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let path = config_path(&self.project_root, self.config.as_deref());
        let rules = load_rules_file(&path)?;
        tracing::debug!("Loaded {} rule(s) from {}", rules.len(), path.display());

        let engine = Engine::new(EngineOptions {
            reporter: self.reporter(),
            policy: self.policy(),
            shell: ShellOptions {
                cwd: Some(self.project_root.clone()),
                ..Default::default()
            },
        });

        let status = engine.check(&rules, out)?;
        if status.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(status.code()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReliantError;
    use std::fs;
    use tempfile::TempDir;

    fn ascii_options() -> GlobalOptions {
        GlobalOptions {
            ascii: true,
            ..Default::default()
        }
    }

    fn write_rules(dir: &Path, content: &str) {
        fs::write(dir.join(".reliantrc"), content).unwrap();
    }

    fn run(cmd: &CheckCommand) -> (CommandResult, String) {
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn passing_rules_succeed() {
        let temp = TempDir::new().unwrap();
        write_rules(
            temp.path(),
            r#"[
                {"name": "Node", "cmd": "echo 1.5.0", "version": "^1.4.0"},
                {"name": "Git", "cmd": "echo 2.0.0", "version": "^1.0.0 || ^2.0.0"}
            ]"#,
        );
        let cmd = CheckCommand::new(temp.path(), &ascii_options(), CheckArgs::default());

        let (result, output) = run(&cmd);

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(output.contains("2 tests, 2 passes, 0 failures"));
    }

    #[test]
    fn failing_rule_exits_one() {
        let temp = TempDir::new().unwrap();
        write_rules(
            temp.path(),
            r#"[{"name": "Git", "cmd": "echo 2.0.0", "version": "^3.0.0"}]"#,
        );
        let cmd = CheckCommand::new(temp.path(), &ascii_options(), CheckArgs::default());

        let (result, output) = run(&cmd);

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(output.contains("[FAIL] Git"));
    }

    #[test]
    fn commands_run_in_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("VERSION"), "4.2.0\n").unwrap();
        write_rules(
            temp.path(),
            r#"[{"name": "File", "cmd": "cat VERSION", "version": "~4.2"}]"#,
        );
        let cmd = CheckCommand::new(temp.path(), &ascii_options(), CheckArgs::default());

        let (result, _) = run(&cmd);

        assert!(result.success);
    }

    #[test]
    fn explicit_config_path_is_used() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rules.json");
        fs::write(
            &path,
            r#"[{"name": "Node", "cmd": "echo v18.1.0", "version": ">=18"}]"#,
        )
        .unwrap();
        let options = GlobalOptions {
            config: Some(path),
            ascii: true,
        };
        let cmd = CheckCommand::new(temp.path(), &options, CheckArgs::default());

        let (result, _) = run(&cmd);

        assert!(result.success);
    }

    #[test]
    fn missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), &ascii_options(), CheckArgs::default());
        let mut out = Vec::new();

        let err = cmd.execute(&mut out).unwrap_err();

        assert!(matches!(err, ReliantError::ConfigNotFound { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn fail_fast_flag_selects_policy() {
        let temp = TempDir::new().unwrap();
        let args = CheckArgs {
            fail_fast: true,
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), &ascii_options(), args);

        assert_eq!(cmd.policy(), FailurePolicy::FailFast);
        assert!(cmd.args().fail_fast);
    }

    #[test]
    fn json_format_writes_json() {
        let temp = TempDir::new().unwrap();
        write_rules(
            temp.path(),
            r#"[{"name": "Node", "cmd": "echo 1.5.0", "version": "^1.4.0"}]"#,
        );
        let args = CheckArgs {
            format: ReportFormat::Json,
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), &ascii_options(), args);

        let (result, output) = run(&cmd);

        assert!(result.success);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["results"][0]["version"]["found"], "1.5.0");
    }
}
