use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::config::RuleSet;
use crate::error::Result;

/// A file selected for the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path relative to the project directory, `/`-separated.
    pub display_path: String,
    /// Path used to open the file.
    pub source_path: PathBuf,
}

/// Which files a directory walk keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Rules,
    Everything,
}

/// Resolve the configured roots under `project_dir` into a sorted, deduplicated file list.
///
/// Roots that do not exist are skipped. When nothing matches at all and the
/// fallback directory exists, every file beneath it is taken instead.
///
/// # Errors
/// Returns an error if a directory inside a root cannot be listed.
pub fn collect_files(project_dir: &Path, rules: &RuleSet) -> Result<Vec<CandidateFile>> {
    let mut files: BTreeMap<FileKey, PathBuf> = BTreeMap::new();

    for root in &rules.roots {
        let path = project_dir.join(root);
        let meta = match fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(e) => {
                debug!(root = %root, error = %e, "skipping missing root");
                continue;
            }
        };

        if meta.is_dir() {
            walk_dir(project_dir, &path, rules, Selection::Rules, &mut files)?;
        } else if meta.is_file() {
            files.insert(FileKey::new(project_dir, &path), path);
        } else {
            debug!(root = %root, "skipping root that is neither file nor directory");
        }
    }

    if files.is_empty() {
        let fallback = project_dir.join(&rules.fallback_dir);
        if fallback.is_dir() {
            warn!(
                dir = %fallback.display(),
                "no files matched the configured roots; including everything under the fallback directory"
            );
            walk_dir(project_dir, &fallback, rules, Selection::Everything, &mut files)?;
        }
    }

    Ok(files
        .into_iter()
        .map(|(key, source_path)| CandidateFile {
            display_path: key.display,
            source_path,
        })
        .collect())
}

fn walk_dir(
    project_dir: &Path,
    dir: &Path,
    rules: &RuleSet,
    selection: Selection,
    acc: &mut BTreeMap<FileKey, PathBuf>,
) -> Result<()> {
    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let prune = rules.clone();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        !(is_dir && entry.file_name().to_str().is_some_and(|n| prune.is_excluded_dir(n)))
    });

    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        if selection == Selection::Everything || rules.allows_file(path) {
            acc.insert(FileKey::new(project_dir, path), path.to_path_buf());
        }
    }

    Ok(())
}

/// Dedup/sort key: the `/`-joined display string, then the raw relative path.
///
/// Distinct names that decode to the same lossy string stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct FileKey {
    display: String,
    relative: PathBuf,
}

impl FileKey {
    fn new(project_dir: &Path, path: &Path) -> Self {
        let relative: PathBuf = path
            .strip_prefix(project_dir)
            .unwrap_or(path)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        let display = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self { display, relative }
    }
}
