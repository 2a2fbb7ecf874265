//! Existence staging for directories and files.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use tracing::debug;

use crate::errors::FsError;

/// Ok when `path` is a directory, creating it (and parents) when missing.
///
/// A path occupied by a plain file is NotADirectory; a failed creation is
/// DirectoryCreateFailed.
pub fn ensure_directory(path: &Path) -> Result<(), FsError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => return Err(FsError::NotADirectory(path.to_path_buf())),
        Err(_) => {}
    }
    fs::create_dir_all(path).map_err(|e| FsError::DirectoryCreateFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "created directory");
    Ok(())
}

/// Ok when `path`'s parent directory exists or was created.
///
/// NoParent when `path` has no parent component (filesystem root, or a bare
/// relative name with an empty parent).
pub fn ensure_parent_directory(path: &Path) -> Result<(), FsError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(FsError::NoParent(path.to_path_buf())),
    };
    if parent.exists() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|e| FsError::DirectoryCreateFailed {
        path: parent.to_path_buf(),
        source: e,
    })?;
    debug!(path = %parent.display(), "created parent directory");
    Ok(())
}

/// Ok when `path` exists or was created as an empty file.
///
/// The parent chain is created first when missing. A creation racing the
/// existence check is treated as success.
pub fn create_file_if_absent(path: &Path) -> Result<(), FsError> {
    if path.exists() {
        return Ok(());
    }

    stage_parent(path)?;

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            debug!(path = %path.display(), "created file");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(FsError::FileCreateFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Parent staging shared by the operations that create `path`.
///
/// A parentless path is tolerated (creation may target the current directory
/// or the root); a failed creation is reported as ParentCreateFailed against
/// `path`.
pub(crate) fn stage_parent(path: &Path) -> Result<(), FsError> {
    match ensure_parent_directory(path) {
        Ok(()) | Err(FsError::NoParent(_)) => Ok(()),
        Err(FsError::DirectoryCreateFailed {
            path: parent,
            source,
        }) => Err(FsError::ParentCreateFailed {
            path: path.to_path_buf(),
            parent,
            source,
        }),
        Err(other) => Err(other),
    }
}
