use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// One file selected for renaming. Derived once from the input path and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Value of the first run of decimal digits in the basename, `0` when the
    /// name carries no digits. Used solely for ordering.
    pub numeric_key: u64,
    /// Extension including the leading dot, or empty.
    pub extension: String,
}

/// An ordered, filtered batch of files awaiting rename.
///
/// Entries are sorted ascending by numeric key; files sharing a key keep
/// their relative input order, so the caller's selection order is the
/// tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    pub entries: Vec<FileEntry>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a rename plan from caller-supplied paths.
///
/// Paths that do not resolve to a regular file at call time are silently
/// dropped: directories and vanished entries do not participate, while a
/// symlink pointing at a file does. Nothing on disk is modified.
pub fn build_plan<P: AsRef<Path>>(paths: &[P]) -> RenamePlan {
    let mut entries: Vec<FileEntry> = paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy();
            Some(FileEntry {
                path: path.to_path_buf(),
                numeric_key: extract_numeric_key(&name),
                extension: split_extension(&name).to_string(),
            })
        })
        .collect();

    // Stable sort: equal keys keep the caller's order.
    entries.sort_by_key(|entry| entry.numeric_key);

    RenamePlan { entries }
}

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Non-recursive; subdirectories are ignored. The lexicographic order makes
/// the numeric-key tie-break deterministic when a whole folder is selected.
pub fn list_dir_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = dir
        .read_dir()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.path())
        .collect();

    files.sort();
    Ok(files)
}

/// First maximal run of decimal digits in `name`, as a number.
///
/// Runs longer than `u64` can hold saturate to `u64::MAX`; they sort after
/// everything else instead of wrapping.
fn extract_numeric_key(name: &str) -> u64 {
    DIGIT_RUN
        .find(name)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Suffix of `name` starting at the last dot, dot included.
///
/// Empty when there is no dot, or when the only dot leads the name
/// (`.bashrc` has no extension, `.tar.gz` has `.gz`).
fn split_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx..],
        _ => "",
    }
}
