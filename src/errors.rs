use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration. Fatal to the whole call: no files are touched.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("digit width must be at least 1")]
    InvalidDigitWidth,
}

/// Classified failure for a single file. Never aborts the batch; the engine
/// records it and keeps iterating.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RenameError {
    #[error("source file no longer exists")]
    SourceMissing,

    #[error("permission denied")]
    PermissionDenied,

    #[error("a file with the target name already exists")]
    TargetExists,

    #[error("rename would cross a filesystem boundary")]
    CrossesDevices,

    #[error("{0}")]
    Other(String),
}

impl From<io::Error> for RenameError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::SourceMissing,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::AlreadyExists => Self::TargetExists,
            io::ErrorKind::CrossesDevices => Self::CrossesDevices,
            _ => Self::Other(err.to_string()),
        }
    }
}
