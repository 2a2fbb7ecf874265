//! Single-file copy.
//! Applies the destination exist-policy, stages the parent chain, then
//! streams bytes through the shared buffer.

use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::debug;

use crate::errors::FsError;

use super::ensure::stage_parent;
use super::policy::{resolve_destination, ExistPolicy, Resolution};
use super::stream::copy_stream;

/// Copy one regular file from `src` to `dst` under `policy`.
///
/// Behavior:
/// - Missing `src` is NotFound.
/// - An occupied `dst` is resolved by `policy` before any byte moves.
/// - The destination is created fresh (`create_new`), so a racing creation
///   after policy resolution fails instead of clobbering.
pub fn copy_file(src: &Path, dst: &Path, policy: ExistPolicy) -> Result<(), FsError> {
    if !src.exists() {
        return Err(FsError::NotFound(src.to_path_buf()));
    }

    if let Resolution::ShortCircuit = resolve_destination(dst, policy)? {
        return Ok(());
    }

    stage_parent(dst)?;

    let mut reader = File::open(src).map_err(|e| FsError::StreamOpenFailed {
        path: src.to_path_buf(),
        source: e,
    })?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dst)
        .map_err(|e| FsError::StreamOpenFailed {
            path: dst.to_path_buf(),
            source: e,
        })?;

    let bytes = copy_stream(&mut reader, &mut writer).map_err(|e| FsError::CopyFailed {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source: e,
    })?;
    debug!(src = %src.display(), dst = %dst.display(), bytes, "copied file");
    Ok(())
}
