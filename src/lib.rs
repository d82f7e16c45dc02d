//! Batch-rename files into a zero-padded sequential naming scheme, ordered
//! by a numeric token extracted from each original filename, with one-shot
//! undo of the most recent batch.
//!
//! The crate is the engine only: a caller (the `renum` binary, a GUI, a
//! script) supplies the file paths and a [`RenameConfig`], and displays the
//! [`RenameResult`] it gets back. Typical flow:
//!
//! 1. [`plan::build_plan`] turns caller-selected paths into an ordered
//!    [`RenamePlan`];
//! 2. [`rename_engine::apply`] performs the renames and returns the result
//!    plus an [`UndoLog`];
//! 3. the caller keeps the log and may later pass it to
//!    [`rename_engine::revert`].

pub mod errors;
pub mod plan;
pub mod rename_engine;

pub use errors::{ConfigError, RenameError};
pub use plan::{FileEntry, RenamePlan, build_plan, list_dir_files};
pub use rename_engine::{
    RenameConfig, RenameFailure, RenameResult, UndoEntry, UndoLog, apply, apply_with_progress,
    revert,
};
