//! Advisory whole-file locks.
//! Backs the open-handle probe and the scoped lock-with-handler.
//!
//! Notes:
//! - Locks are advisory: only other lock-aware processes observe them.
//! - Both entry points open the file read-write and never create it.
//! - The lock is released when the guard is dropped; the fd close releases
//!   it regardless.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::errors::FsError;

/// Verdict of the advisory-lock probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenState {
    /// The exclusive lock was acquired (and released): no cooperating holder.
    NotOpen,
    /// The lock is held elsewhere.
    Open,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        matches!(self, OpenState::Open)
    }
}

/// RAII guard holding an exclusive advisory lock.
struct LockGuard {
    file: File,
    path: PathBuf,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // flock releases on fd close anyway; the explicit unlock is best-effort.
        let _ = self.file.unlock();
        trace!(path = %self.path.display(), "lock released");
    }
}

fn open_rw(path: &Path) -> io::Result<File> {
    OpenOptions::new().read(true).write(true).open(path)
}

fn is_contended(e: &io::Error) -> bool {
    e.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

/// Probe whether `path` is exclusively locked by a cooperating holder.
///
/// Non-blocking: tries the exclusive lock once. Acquired means NotOpen (the
/// lock is released immediately); unavailable means Open; any other failure,
/// including the open itself, is LockCheckFailed.
pub fn is_file_opened(path: &Path) -> Result<OpenState, FsError> {
    let file = open_rw(path).map_err(|e| FsError::LockCheckFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    match file.try_lock_exclusive() {
        Ok(()) => {
            let _ = file.unlock();
            trace!(path = %path.display(), "probe acquired lock, not open");
            Ok(OpenState::NotOpen)
        }
        Err(e) if is_contended(&e) => {
            trace!(path = %path.display(), "probe contended, open elsewhere");
            Ok(OpenState::Open)
        }
        Err(e) => Err(FsError::LockCheckFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Run `handler` while holding an exclusive advisory lock on `path`.
///
/// Blocks until the lock is granted. Failure reasons are distinct: NotFound
/// when the path is missing, LockOpenFailed when the handle cannot be opened,
/// LockFailed when acquisition fails. The lock is released on every exit
/// path; a panicking handler is caught and reported as HandlerPanicked
/// rather than propagated.
pub fn with_file_lock<T>(path: &Path, handler: impl FnOnce(&Path) -> T) -> Result<T, FsError> {
    let file = open_rw(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            FsError::NotFound(path.to_path_buf())
        } else {
            FsError::LockOpenFailed {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    file.lock_exclusive().map_err(|e| FsError::LockFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "lock acquired");
    let _guard = LockGuard {
        file,
        path: path.to_path_buf(),
    };

    match panic::catch_unwind(AssertUnwindSafe(|| handler(path))) {
        Ok(value) => Ok(value),
        Err(_) => Err(FsError::HandlerPanicked(path.to_path_buf())),
    }
}
