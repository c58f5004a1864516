//! Engine behind the `review-bundle` CLI.
//!
//! A run is a single linear pass: resolve the configured roots into a sorted
//! file list, read each file (capped at the configured size), render one
//! markdown document and atomically write it to the output path.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::info;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod loader;
pub mod report;
pub mod writer;

pub use crate::config::{Config, ConfigBuilder, RuleSet, RuleSetBuilder};
pub use crate::error::{BundleError, Result};
pub use crate::report::{BundleReport, FileRecord};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub files: usize,
    pub truncated: usize,
    pub bytes_written: usize,
}

/// Collect and load every file selected by `config` into an in-memory report.
///
/// # Errors
/// Returns an error if a directory cannot be walked or a selected file cannot be read.
pub fn build_report(config: &Config, generated_at: DateTime<Utc>) -> Result<BundleReport> {
    let max_bytes = config.max_file_bytes()?;
    let candidates = filesystem::collect_files(&config.project_dir, &config.rules)?;

    let files = candidates
        .iter()
        .map(|c| loader::load_file(c, max_bytes))
        .collect::<Result<Vec<_>>>()?;

    Ok(BundleReport {
        generated_at,
        tool_version: format!("review-bundle v{VERSION}"),
        max_file_kib: config.max_file_kib,
        files,
    })
}

/// Build the report and write it to `config.output_path`.
///
/// Nothing is written unless every selected file was read successfully.
///
/// # Errors
/// Returns the first walk, read or write failure.
pub fn run(config: &Config) -> Result<RunSummary> {
    let report = build_report(config, Utc::now())?;
    let rendered = report.render();
    writer::write_atomic(&config.output_path, rendered.as_bytes())?;

    let summary = RunSummary {
        output_path: config.output_path.clone(),
        files: report.file_count(),
        truncated: report.truncated_count(),
        bytes_written: rendered.len(),
    };
    info!(
        output = %summary.output_path.display(),
        files = summary.files,
        truncated = summary.truncated,
        bytes = summary.bytes_written,
        "bundle written"
    );
    Ok(summary)
}
