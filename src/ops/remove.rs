//! Recursive delete.
//! Removes plain files, symlinks, and whole directory trees.
//!
//! Behavior:
//! - Deleting a missing path succeeds (idempotent).
//! - Symlinks are unlinked, never followed, so a linked-to tree survives
//!   and a link cycle cannot recurse.
//! - Fail-fast: the first child that cannot be deleted aborts the walk,
//!   remaining siblings are not attempted.

use std::fs;
use std::io;
use std::path::Path;
use tracing::trace;

use crate::errors::FsError;

/// Delete `path` recursively.
///
/// Directories are emptied child-by-child (depth-first, sibling order
/// unspecified) and then removed. Any failure is reported as DeleteFailed
/// naming the path that could not be deleted.
pub fn delete_recursive(path: &Path) -> Result<(), FsError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(delete_failed(path, e)),
    };

    if meta.file_type().is_dir() {
        let entries = fs::read_dir(path).map_err(|e| delete_failed(path, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| delete_failed(path, e))?;
            delete_recursive(&entry.path())?;
        }
        fs::remove_dir(path).map_err(|e| delete_failed(path, e))?;
        trace!(path = %path.display(), "removed directory");
    } else {
        fs::remove_file(path).map_err(|e| delete_failed(path, e))?;
        trace!(path = %path.display(), "removed file");
    }
    Ok(())
}

fn delete_failed(path: &Path, source: io::Error) -> FsError {
    FsError::DeleteFailed {
        path: path.to_path_buf(),
        source,
    }
}
