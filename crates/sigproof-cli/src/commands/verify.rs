//! `sigproof verify` — verify every proof signature in one or more request files.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::batch::{verify_request, BatchReport};
use crate::loader::load_request;
use crate::summary::{summary_lines, FileReport};

/// Signature counts across every verified request file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerifyTotals {
    /// Signatures that verified.
    pub valid: usize,
    /// Signatures that did not verify or could not be checked.
    pub invalid: usize,
    /// Request files that could not be loaded or whose certificate was unusable.
    pub failed_files: usize,
}

/// Verify each request file in `paths` and write the results to `out`.
///
/// Text output is one line per validation result; with `json` a single JSON
/// array with one entry per file is written instead. A file that cannot be
/// loaded, or whose certificate cannot be used, is reported in place and
/// counted in [`VerifyTotals::failed_files`]; the remaining files are still
/// verified.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn run_verify<W: Write>(paths: &[PathBuf], json: bool, out: &mut W) -> Result<VerifyTotals> {
    let mut totals = VerifyTotals::default();
    let mut files: Vec<(&PathBuf, Result<BatchReport>)> = Vec::with_capacity(paths.len());

    for path in paths {
        let result = verify_file(path);
        match &result {
            Ok(report) => {
                info!(
                    "{}: {} of {} signatures valid",
                    path.display(),
                    report.valid_count(),
                    report.outcomes.len()
                );
                totals.valid += report.valid_count();
                totals.invalid += report.invalid_count();
                if !json {
                    for line in summary_lines(report) {
                        writeln!(out, "{line}")?;
                    }
                }
            }
            Err(e) => {
                warn!("{e:#}");
                totals.failed_files += 1;
                if !json {
                    writeln!(out, "-- Request {} could not be verified: {e:#}", path.display())?;
                }
            }
        }
        files.push((path, result));
    }

    if json {
        let tagged: Vec<FileReport<'_>> = files
            .iter()
            .map(|(path, result)| match result {
                Ok(report) => FileReport::new(path, report),
                Err(e) => FileReport::failed(path, format!("{e:#}")),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &tagged)?;
        writeln!(out)?;
    }

    Ok(totals)
}

fn verify_file(path: &Path) -> Result<BatchReport> {
    let request = load_request(path)?;
    verify_request(&request).with_context(|| format!("verifying {}", path.display()))
}
