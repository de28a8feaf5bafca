//! Derived report model.
//!
//! Built from results on demand and never stored.

use serde::Serialize;

use crate::engine::ExecutionResult;
use crate::ui::StatusKind;

/// Pass/fail tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
}

impl Counts {
    /// Count results; failures are everything that did not pass.
    pub fn from_results(results: &[ExecutionResult]) -> Self {
        let total = results.len();
        let pass = results.iter().filter(|r| r.pass).count();
        Self {
            total,
            pass,
            fail: total - pass,
        }
    }

    /// `N tests, P passes, F failures`, pluralised.
    pub fn line(&self) -> String {
        format!(
            "{}, {}, {}",
            pluralise(self.total, "test", "tests"),
            pluralise(self.pass, "pass", "passes"),
            pluralise(self.fail, "failure", "failures")
        )
    }
}

/// One status line in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub name: String,
    pub status: StatusKind,
}

/// Failure detail for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub name: String,
    pub detail: IssueDetail,
}

/// Why a rule failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueDetail {
    /// The command could not run or exited non-zero.
    Error(String),
    /// The command ran but its version is outside the range.
    Mismatch { required: String, found: String },
}

/// Everything a reporter needs, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<SummaryEntry>,
    pub issues: Vec<Issue>,
    pub counts: Counts,
}

impl Report {
    /// Build the report for a set of results.
    pub fn from_results(results: &[ExecutionResult]) -> Self {
        let entries = results
            .iter()
            .map(|r| SummaryEntry {
                name: r.name.clone(),
                status: StatusKind::from_pass(r.pass),
            })
            .collect();

        let issues = results
            .iter()
            .filter(|r| !r.pass)
            .map(|r| Issue {
                name: r.name.clone(),
                detail: match &r.error {
                    Some(error) => IssueDetail::Error(error.clone()),
                    None => IssueDetail::Mismatch {
                        required: r.version.required.clone(),
                        found: r.version.found.clone(),
                    },
                },
            })
            .collect();

        Self {
            entries,
            issues,
            counts: Counts::from_results(results),
        }
    }
}

/// `1 test`, `2 tests`, `0 tests`.
pub fn pluralise(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
