use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Result of scanning the source tree.
#[derive(Debug)]
pub struct ScanResult {
    /// Matching files in walk order.
    pub files: Vec<PathBuf>,
    /// Entries skipped because they matched an ignore pattern.
    pub ignored_count: usize,
}

/// Recursively collect every file under `root` whose name ends with `extension`.
///
/// The walk is depth-first with entries sorted by file name, so the order is
/// stable across runs. Symbolic links are neither followed nor collected.
/// `ignores` are glob patterns matched against paths relative to `root`;
/// a matching directory is not descended into.
///
/// Any unreadable directory, including a missing `root`, is an error. So is a
/// `root` that is not a directory.
pub fn scan_files(root: &Path, extension: &str, ignores: &[String]) -> Result<ScanResult> {
    if root.exists() && !root.is_dir() {
        bail!("Failed to read directory: {}: not a directory", root.display());
    }

    let patterns = ignores
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut files = Vec::new();
    let mut ignored_count = 0;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let ignored = is_ignored(root, entry, &patterns);
            if ignored {
                ignored_count += 1;
            }
            !ignored
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                return Err(err)
                    .with_context(|| format!("Failed to read directory: {}", path.display()));
            }
        };

        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    Ok(ScanResult {
        files,
        ignored_count,
    })
}

/// Case-sensitive suffix match on the file name.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

fn is_ignored(root: &Path, entry: &DirEntry, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() || entry.depth() == 0 {
        return false;
    }
    let Ok(relative) = entry.path().strip_prefix(root) else {
        return false;
    };
    patterns.iter().any(|p| p.matches_path(relative))
}
