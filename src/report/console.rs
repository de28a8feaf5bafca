//! Human-readable console reporter.
//!
//! ```text
//! Environment check
//! =================
//!
//! Summary:
//! ✓ Node
//! ✗ Git
//!
//! 2 tests, 1 pass, 1 failure
//!
//! Issues:
//! + Git requires ^3.0.0 but found 2.0.0
//! ```

use std::io::{self, Write};

use crate::engine::display_found;
use crate::shell::supports_unicode_glyphs;
use crate::ui::{should_use_colors, ReliantTheme};

use super::summary::{IssueDetail, Report};
use super::{Outcome, Reporter};

const TITLE: &str = "Environment check";

/// Formats results for terminal display.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    theme: ReliantTheme,
    ascii: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(should_use_colors(), !supports_unicode_glyphs())
    }
}

impl ConsoleReporter {
    /// Create a console reporter.
    ///
    /// * `use_color` - emit ANSI styling
    /// * `ascii` - use `[ok]`/`[FAIL]` instead of `✓`/`✗`
    pub fn new(use_color: bool, ascii: bool) -> Self {
        Self {
            theme: ReliantTheme::for_color(use_color),
            ascii,
        }
    }

    fn write_title(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.theme.header.apply_to(TITLE))?;
        writeln!(out, "{}", "=".repeat(TITLE.len()))?;
        writeln!(out)
    }

    fn write_report(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let theme = &self.theme;

        writeln!(out, "Summary:")?;
        for entry in &report.entries {
            writeln!(
                out,
                "{}",
                entry.status.format(theme, self.ascii, &entry.name)
            )?;
        }
        writeln!(out)?;

        writeln!(out, "{}", report.counts.line())?;
        writeln!(out)?;

        if report.issues.is_empty() {
            writeln!(out, "Hooray! No issues!")?;
            return writeln!(out);
        }

        writeln!(out, "Issues:")?;
        for issue in &report.issues {
            let name = theme.highlight.apply_to(&issue.name);
            match &issue.detail {
                IssueDetail::Error(error) => {
                    writeln!(out, "+ {} failed: {}", name, theme.error.apply_to(error))?;
                }
                IssueDetail::Mismatch { required, found } => {
                    writeln!(
                        out,
                        "+ {} requires {} but found {}",
                        name,
                        theme.highlight.apply_to(required),
                        theme.error_value.apply_to(display_found(found))
                    )?;
                }
            }
        }
        writeln!(out)
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, outcome: Outcome<'_>, out: &mut dyn Write) -> io::Result<()> {
        self.write_title(out)?;

        match outcome {
            Outcome::Error(error) => {
                writeln!(out, "{}", self.theme.error.apply_to("Error:"))?;
                writeln!(out, "{}", self.theme.error.apply_to(error))?;
                writeln!(out)
            }
            Outcome::Results(results) => self.write_report(&Report::from_results(results), out),
        }
    }
}
