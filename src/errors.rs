//! Typed error definitions for fskit.
//! Every operation reports failure through one of these well-known statuses,
//! carrying the offending path(s) and the underlying io::Error where one exists.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Path is not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Path has no parent component: {0}")]
    NoParent(PathBuf),

    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create parent directory {parent} for {path}: {source}")]
    ParentCreateFailed {
        path: PathBuf,
        parent: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}: {source}")]
    FileCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to delete {path}: {source}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open {path} for streaming: {source}")]
    StreamOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Copy failed {src} -> {dst}: {source}")]
    CopyFailed {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Copy+delete fallback failed {src} -> {dst}: {source}")]
    CopyThenDeleteFailed {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: Box<FsError>,
    },

    #[error("File is in use by another process: {0}")]
    FileBusy(PathBuf),

    #[error("Refusing to operate on symlink: {0}")]
    SymlinkUnsupported(PathBuf),

    #[error("Failed to open lock handle for {path}: {source}")]
    LockOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to acquire lock on {path}: {source}")]
    LockFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Lock probe failed for {path}: {source}")]
    LockCheckFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Handler panicked while holding lock on {0}")]
    HandlerPanicked(PathBuf),

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Stable snake_case tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FsError::NotFound(_) => "not_found",
            FsError::DestinationExists(_) => "destination_exists",
            FsError::NotADirectory(_) => "not_a_directory",
            FsError::NotAFile(_) => "not_a_file",
            FsError::NoParent(_) => "no_parent",
            FsError::DirectoryCreateFailed { .. } => "directory_create_failed",
            FsError::ParentCreateFailed { .. } => "parent_create_failed",
            FsError::FileCreateFailed { .. } => "file_create_failed",
            FsError::DeleteFailed { .. } => "delete_failed",
            FsError::StreamOpenFailed { .. } => "stream_open_failed",
            FsError::CopyFailed { .. } => "copy_failed",
            FsError::CopyThenDeleteFailed { .. } => "copy_then_delete_failed",
            FsError::FileBusy(_) => "file_busy",
            FsError::SymlinkUnsupported(_) => "symlink_unsupported",
            FsError::LockOpenFailed { .. } => "lock_open_failed",
            FsError::LockFailed { .. } => "lock_failed",
            FsError::LockCheckFailed { .. } => "lock_check_failed",
            FsError::HandlerPanicked(_) => "handler_panicked",
            FsError::ReadFailed { .. } => "read_failed",
            FsError::WriteFailed { .. } => "write_failed",
        }
    }
}
