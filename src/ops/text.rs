//! Text read/write helpers.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

use crate::errors::FsError;

use super::ensure::stage_parent;
use super::policy::{resolve_destination, ExistPolicy, Resolution};

/// Drain `reader` to EOF and decode the bytes as UTF-8.
pub fn read_text_from<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Read the whole of `path` as UTF-8 text.
///
/// NotFound when missing, NotAFile when not a regular file; read errors
/// (including invalid UTF-8) are ReadFailed.
pub fn read_text(path: &Path) -> Result<String, FsError> {
    let meta = fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            FsError::NotFound(path.to_path_buf())
        } else {
            FsError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !meta.is_file() {
        return Err(FsError::NotAFile(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| FsError::StreamOpenFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_text_from(file).map_err(|e| FsError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `text` into `path` under `policy`.
///
/// The parent chain is created when missing; an occupied destination is
/// resolved by `policy` before the file is created fresh.
pub fn write_text(path: &Path, text: &str, policy: ExistPolicy) -> Result<(), FsError> {
    stage_parent(path)?;

    if let Resolution::ShortCircuit = resolve_destination(path, policy)? {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| FsError::FileCreateFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| FsError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote text");
    Ok(())
}
