use std::fs;

use tracing::debug;

use crate::error::{BundleError, Result};
use crate::filesystem::CandidateFile;
use crate::report::{FileRecord, fence_lang};

/// Read a candidate file, keeping at most `max_bytes` of its content.
///
/// # Errors
/// Returns [`BundleError::FileRead`] if the file cannot be read.
pub fn load_file(candidate: &CandidateFile, max_bytes: u64) -> Result<FileRecord> {
    let mut content = fs::read(&candidate.source_path).map_err(|e| BundleError::FileRead {
        path: candidate.source_path.clone(),
        source: e,
    })?;

    let size = content.len() as u64;
    let truncated = size > max_bytes;
    if truncated {
        content.truncate(usize::try_from(max_bytes).unwrap_or(usize::MAX));
    }
    debug!(path = %candidate.display_path, size, truncated, "loaded file");

    Ok(FileRecord {
        path: candidate.display_path.clone(),
        size,
        truncated,
        lang: fence_lang(&candidate.display_path),
        content,
    })
}
