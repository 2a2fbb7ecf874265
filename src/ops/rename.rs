//! Move with fallback.
//! Attempts an atomic rename; on failure, probes the source for an open
//! handle and falls back to copy+delete.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::errors::FsError;

use super::copy_tree::copy_tree;
use super::ensure::stage_parent;
use super::lock::{is_file_opened, OpenState};
use super::policy::{resolve_destination, ExistPolicy, Resolution};
use super::remove::delete_recursive;

/// Move `src` (file or directory) to `dst` under `policy`.
///
/// Behavior:
/// - Missing `src` is NotFound; an occupied `dst` is resolved by `policy`.
/// - A successful OS rename finishes the move atomically.
/// - When the rename fails and the probe reports the source open elsewhere,
///   the move stops with FileBusy. An inconclusive probe does not stop it.
/// - The fallback copies the tree then deletes the source; a failing
///   sub-step is reported as CopyThenDeleteFailed wrapping its status.
pub fn rename(src: &Path, dst: &Path, policy: ExistPolicy) -> Result<(), FsError> {
    if !src.exists() {
        return Err(FsError::NotFound(src.to_path_buf()));
    }

    if let Resolution::ShortCircuit = resolve_destination(dst, policy)? {
        return Ok(());
    }

    stage_parent(dst)?;

    match fs::rename(src, dst) {
        Ok(()) => {
            info!(src = %src.display(), dst = %dst.display(), "renamed atomically");
            return Ok(());
        }
        Err(e) => {
            warn!(error = %e, hint = rename_hint(&e), "atomic rename failed");
        }
    }

    match is_file_opened(src) {
        Ok(OpenState::Open) => return Err(FsError::FileBusy(src.to_path_buf())),
        Ok(OpenState::NotOpen) => {}
        Err(e) => {
            debug!(error = %e, "open-handle probe inconclusive, continuing with copy fallback");
        }
    }

    copy_tree(src, dst, ExistPolicy::Overwrite).map_err(|e| copy_then_delete_failed(src, dst, e))?;
    delete_recursive(src).map_err(|e| copy_then_delete_failed(src, dst, e))?;
    info!(src = %src.display(), dst = %dst.display(), "moved via copy+delete");
    Ok(())
}

fn copy_then_delete_failed(src: &Path, dst: &Path, source: FsError) -> FsError {
    FsError::CopyThenDeleteFailed {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source: Box::new(source),
    }
}

#[cfg(unix)]
fn rename_hint(e: &io::Error) -> &'static str {
    match e.raw_os_error() {
        Some(code) if code == libc::EXDEV => "cross-filesystem; will copy instead",
        Some(code) if code == libc::EACCES || code == libc::EPERM => {
            "permission denied; check destination perms"
        }
        _ => "falling back to copy",
    }
}

#[cfg(not(unix))]
fn rename_hint(e: &io::Error) -> &'static str {
    match e.kind() {
        io::ErrorKind::PermissionDenied => "permission denied; check destination perms",
        _ => "falling back to copy",
    }
}
