//! List command implementation.
//!
//! The `reliant list` command shows the loaded rules without running them.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::{config_path, load_rules_file};
use crate::error::Result;
use crate::ui::{should_use_colors, ReliantTheme};

use super::dispatcher::{Command, CommandResult, GlobalOptions};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, options: &GlobalOptions, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: options.config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let path = config_path(&self.project_root, self.config.as_deref());
        let rules = load_rules_file(&path)?;

        if self.args.json {
            serde_json::to_writer_pretty(&mut *out, &rules).map_err(anyhow::Error::from)?;
            writeln!(out)?;
            return Ok(CommandResult::success());
        }

        let theme = ReliantTheme::for_color(should_use_colors());
        writeln!(out, "{}", theme.header.apply_to("Rules:"))?;
        for rule in &rules {
            writeln!(
                out,
                "  {} {} {}",
                theme.highlight.apply_to(&rule.name),
                theme.dim.apply_to("-"),
                rule.cmd
            )?;
            writeln!(out, "    {}", theme.dim.apply_to(format!("requires {}", rule.version)))?;
        }

        Ok(CommandResult::success())
    }
}
