//! Human-readable and JSON renderings of batch reports.

use std::path::Path;

use serde::Serialize;

use crate::batch::{BatchReport, VerificationOutcome};

/// A batch report tagged with the request file it came from.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport<'a> {
    /// Request file path.
    pub path: String,
    /// Count of valid signatures.
    pub valid: usize,
    /// Count of invalid or unverifiable signatures.
    pub invalid: usize,
    /// Per-item outcomes.
    pub outcomes: &'a [VerificationOutcome],
    /// Why the file could not be verified at all, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> FileReport<'a> {
    /// Tag `report` with `path`.
    #[must_use]
    pub fn new(path: &Path, report: &'a BatchReport) -> Self {
        Self {
            path: path.display().to_string(),
            valid: report.valid_count(),
            invalid: report.invalid_count(),
            outcomes: &report.outcomes,
            error: None,
        }
    }

    /// Report a file that could not be verified, with no outcomes.
    #[must_use]
    pub fn failed(path: &Path, error: String) -> Self {
        Self {
            path: path.display().to_string(),
            valid: 0,
            invalid: 0,
            outcomes: &[],
            error: Some(error),
        }
    }
}

/// Render the one-line summary for `outcome`.
#[must_use]
pub fn outcome_line(outcome: &VerificationOutcome) -> String {
    let verdict = if outcome.is_valid { "valid" } else { "invalid" };
    match &outcome.error {
        Some(error) => format!(
            "-- Signature of result {} is {verdict} ({}: {error})",
            outcome.id,
            error.kind()
        ),
        None => format!("-- Signature of result {} is {verdict}", outcome.id),
    }
}

/// Render one summary line per outcome, in report order.
#[must_use]
pub fn summary_lines(report: &BatchReport) -> Vec<String> {
    report.outcomes.iter().map(outcome_line).collect()
}
