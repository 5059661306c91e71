//! factsheet — host-inventory fact normalization and report generation.
//!
//! Reads per-host JSON fact documents matched by one or more glob patterns,
//! normalizes each into a canonical host record, and renders the sorted
//! record set as an xlsx workbook plus a plain-text table on stdout.
//!
//! # Architecture
//!
//! ```text
//! glob patterns ──► per-file JSON read ──► normalizer ──► HostRecord
//!                                                            │
//!                               HostRecordSet (sort by IP) ◄─┘
//!                                        │
//!                              xlsx workbook + text table
//! ```
//!
//! Processing is fully sequential: one document is read, normalized, and
//! appended before the next. A malformed file is logged and skipped, never
//! fatal; zero valid hosts after all inputs is fatal.

pub mod input;

use factsheet_core::{normalize::normalize, Config};
use factsheet_report::{text, xlsx, HostRecordSet};
use std::path::PathBuf;
use tracing::{info, warn};

/// Fatal run-level failures. Per-file problems are not errors at this level;
/// they are logged and counted in the [`RunSummary`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("no files matched the given pattern(s)")]
    NoMatches,
    #[error("no valid host documents could be read")]
    NoValidHosts,
    #[error(transparent)]
    Report(#[from] factsheet_report::ReportError),
}

/// What to process and where to write it.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output: PathBuf,
    pub patterns: Vec<String>,
    /// Skip the spreadsheet and print only the text table.
    pub text_only: bool,
}

/// Outcome counts for the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub hosts: usize,
    pub skipped: usize,
}

/// Execute one batch run: expand patterns, normalize every readable
/// document, sort, render.
pub fn run(opts: &RunOptions) -> Result<RunSummary, RunError> {
    let cfg = Config::load().unwrap_or_else(|err| {
        warn!(%err, "could not load config file, using built-in defaults");
        Config::defaults()
    });

    let files = input::expand(&opts.patterns)?;
    info!(files = files.len(), "processing fact documents");

    let mut set = HostRecordSet::new();
    let mut skipped = 0usize;
    for path in &files {
        match input::load_document(path) {
            Ok(doc) => set.push(normalize(&doc, &cfg)),
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable document");
                skipped += 1;
            }
        }
    }

    if set.is_empty() {
        return Err(RunError::NoValidHosts);
    }
    set.sort_by_ip();

    println!("{}", text::render(&set, cfg.report.ports_preview));
    if !opts.text_only {
        xlsx::write_workbook(&opts.output, &set)?;
    }

    Ok(RunSummary { hosts: set.len(), skipped })
}
