//! JSON reporter.
//!
//! Emits machine-readable results for tooling integration.

use serde::Serialize;
use std::io::{self, Write};

use crate::engine::ExecutionResult;

use super::summary::Counts;
use super::{Outcome, Reporter};

/// Formats results as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

#[derive(Serialize)]
#[serde(untagged)]
enum JsonOutput<'a> {
    Results {
        results: &'a [ExecutionResult],
        summary: Counts,
    },
    Error {
        error: String,
    },
}

impl JsonReporter {
    /// Create a new JSON reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for JsonReporter {
    fn report(&self, outcome: Outcome<'_>, out: &mut dyn Write) -> io::Result<()> {
        let output = match outcome {
            Outcome::Results(results) => JsonOutput::Results {
                results,
                summary: Counts::from_results(results),
            },
            Outcome::Error(error) => JsonOutput::Error {
                error: error.to_string(),
            },
        };

        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)
    }
}
