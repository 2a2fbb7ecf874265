//! Recursive copy.
//! Dispatches on the source type and walks directories top-down.
//!
//! Behavior:
//! - A plain-file source delegates to copy_file.
//! - Directories at the destination are ensured (existing ones are merged
//!   into); the exist-policy applies per file.
//! - Fail-fast: the first failing entry aborts the walk with its status.
//! - Symlinks anywhere in the tree are refused.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::FsError;

use super::copy_file::copy_file;
use super::ensure::ensure_directory;
use super::policy::ExistPolicy;

/// Copy `src` (file or directory tree) to `dst` under `policy`.
pub fn copy_tree(src: &Path, dst: &Path, policy: ExistPolicy) -> Result<(), FsError> {
    let meta = match fs::symlink_metadata(src) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FsError::NotFound(src.to_path_buf()));
        }
        Err(e) => {
            return Err(FsError::CopyFailed {
                src: src.to_path_buf(),
                dst: dst.to_path_buf(),
                source: e,
            });
        }
    };

    let ftype = meta.file_type();
    if ftype.is_symlink() {
        return Err(FsError::SymlinkUnsupported(src.to_path_buf()));
    }
    if ftype.is_file() {
        return copy_file(src, dst, policy);
    }

    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(|e| walk_failed(dst, e))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| FsError::CopyFailed {
                src: entry.path().to_path_buf(),
                dst: dst.to_path_buf(),
                source: io::Error::other(e),
            })?;
        let target = dst.join(rel);

        let etype = entry.file_type();
        if etype.is_symlink() {
            return Err(FsError::SymlinkUnsupported(entry.path().to_path_buf()));
        } else if etype.is_dir() {
            ensure_directory(&target)?;
        } else {
            copy_file(entry.path(), &target, policy)?;
        }
    }
    debug!(src = %src.display(), dst = %dst.display(), "copied tree");
    Ok(())
}

fn walk_failed(dst: &Path, e: walkdir::Error) -> FsError {
    let path = e
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dst.to_path_buf());
    let source = e
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("directory walk failed"));
    FsError::CopyFailed {
        src: path,
        dst: dst.to_path_buf(),
        source,
    }
}
