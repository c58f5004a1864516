use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BundleError, Result};

/// Atomically replace `path` with `data` via a temp file in the same directory and a rename.
///
/// On failure the temp file is removed and `path` is left as it was.
///
/// # Errors
/// Returns [`BundleError::Write`] if the temp file cannot be written or renamed.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let wrap = |source: std::io::Error| BundleError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if path.file_name().is_none() {
        return Err(wrap(std::io::Error::other("output path has no file name")));
    }

    // Temp name length must not depend on the output name (NAME_MAX).
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let result = write_then_rename(&tmp, path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(wrap)?;

    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(&parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

fn write_then_rename(tmp: &Path, dest: &Path, data: &[u8]) -> std::io::Result<()> {
    let file = File::create(tmp)?;
    let mut w = BufWriter::new(file);
    w.write_all(data)?;
    w.flush()?;
    w.get_ref().sync_all()?;
    drop(w);
    fs::rename(tmp, dest)
}
