use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, RenameError};
use crate::plan::{FileEntry, RenamePlan};

/// Naming scheme for a rename batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Minimum number of digits used to render the sequence index. Indices
    /// with more digits render in full, never truncated.
    pub digit_width: usize,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl RenameConfig {
    pub fn new(digit_width: usize) -> Self {
        Self {
            digit_width,
            prefix: None,
            suffix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.digit_width == 0 {
            return Err(ConfigError::InvalidDigitWidth);
        }
        Ok(())
    }

    /// Synthesize the basename for the 1-based sequence index `index`.
    pub fn target_name(&self, index: usize, extension: &str) -> String {
        let prefix = self.prefix.as_deref().unwrap_or("");
        let suffix = self.suffix.as_deref().unwrap_or("");
        format!(
            "{prefix}{index:0width$}{suffix}{extension}",
            width = self.digit_width
        )
    }
}

/// Record of one successfully performed rename. `new_path` is the file the
/// rename created, `old_path` the name to restore on revert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    pub new_path: PathBuf,
    pub old_path: PathBuf,
}

/// The renames actually performed by the most recent batch, in execution
/// order.
///
/// A log is produced by [`apply`] and consumed by [`revert`]; taking it by
/// value there makes revert one-shot. Which log is "current" is the caller's
/// decision: keeping only the latest one reproduces the single undo slot of
/// the original tool, but nothing stops a caller from stacking several.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoLog {
    entries: Vec<UndoEntry>,
}

impl UndoLog {
    pub fn entries(&self) -> &[UndoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record(&mut self, new_path: PathBuf, old_path: PathBuf) {
        self.entries.push(UndoEntry { new_path, old_path });
    }
}

/// A file the batch could not process, with the classified reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFailure {
    pub path: PathBuf,
    pub reason: RenameError,
}

/// Aggregate outcome of [`apply`] or [`revert`].
///
/// `failed` being non-empty is a partial failure, surfaced here rather than
/// as an error: the engine always finishes iterating the whole batch once
/// started. `skipped` counts revert entries whose renamed file had already
/// disappeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameResult {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: Vec<RenameFailure>,
}

impl RenameResult {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// True when the call had nothing to do: empty plan or empty log.
    pub fn is_noop(&self) -> bool {
        self.succeeded == 0 && self.skipped == 0 && self.failed.is_empty()
    }
}

/// Apply a rename plan.
///
/// Each entry at 1-based plan index `i` is renamed, within its own parent
/// directory, to `prefix + zero_pad(i) + suffix + extension`. A per-file
/// failure is recorded and the batch continues; only `ConfigError` aborts,
/// and it does so before any file is touched. An empty plan is a no-op.
///
/// Returns the aggregate result together with the undo log built from the
/// successful renames.
pub fn apply(
    plan: &RenamePlan,
    config: &RenameConfig,
) -> Result<(RenameResult, UndoLog), ConfigError> {
    apply_with_progress(plan, config, |_, _, _| {})
}

/// [`apply`], invoking `on_file` after each entry completes.
///
/// The callback receives the entry, the synthesized target path, and the
/// failure when the rename did not happen. Calls arrive strictly in plan
/// order, one per entry, which is all the progress reporting the
/// single-threaded engine offers.
pub fn apply_with_progress<F>(
    plan: &RenamePlan,
    config: &RenameConfig,
    mut on_file: F,
) -> Result<(RenameResult, UndoLog), ConfigError>
where
    F: FnMut(&FileEntry, &Path, Option<&RenameError>),
{
    config.validate()?;

    let mut result = RenameResult::default();
    let mut log = UndoLog::default();

    for (index, entry) in plan.entries.iter().enumerate() {
        let new_name = config.target_name(index + 1, &entry.extension);
        let new_path = entry.path.with_file_name(&new_name);

        match rename_file(&entry.path, &new_path) {
            Ok(()) => {
                result.succeeded += 1;
                on_file(entry, &new_path, None);
                log.record(new_path, entry.path.clone());
            }
            Err(reason) => {
                on_file(entry, &new_path, Some(&reason));
                result.failed.push(RenameFailure {
                    path: entry.path.clone(),
                    reason,
                });
            }
        }
    }

    Ok((result, log))
}

/// Revert the most recent batch using its undo log.
///
/// Entries are processed in reverse of recording order, the last rename
/// reverted first. A `new_path` that no longer exists is counted as skipped,
/// not failed: the file was moved or deleted externally and there is nothing
/// left to restore. The log is consumed regardless of outcome, so a
/// partially failed revert cannot be retried. An empty log is a no-op.
pub fn revert(log: UndoLog) -> RenameResult {
    let mut result = RenameResult::default();

    for entry in log.entries.into_iter().rev() {
        if entry.new_path.symlink_metadata().is_err() {
            result.skipped += 1;
            continue;
        }

        match fs::rename(&entry.new_path, &entry.old_path) {
            Ok(()) => result.succeeded += 1,
            Err(err) => result.failed.push(RenameFailure {
                path: entry.new_path,
                reason: err.into(),
            }),
        }
    }

    result
}

/// Rename `old` to `new`, refusing to clobber an existing target.
///
/// `std::fs::rename` on Unix silently replaces the destination, so an
/// occupied target has to be rejected here for a collision to surface as the
/// per-file error the caller expects. Renaming a file onto its own current
/// name stays legal.
fn rename_file(old: &Path, new: &Path) -> Result<(), RenameError> {
    if new != old && new.symlink_metadata().is_ok() {
        return Err(RenameError::TargetExists);
    }
    fs::rename(old, new)?;
    Ok(())
}
