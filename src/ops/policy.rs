//! Destination exist-policies.
//! ExistPolicy decides what happens when a destination path is already
//! occupied; resolve_destination applies it in one place for copy, rename
//! and write operations.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::errors::FsError;

use super::remove::delete_recursive;

/// Caller-selected behavior for an occupied destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistPolicy {
    /// Delete the occupant, then proceed (default)
    #[default]
    Overwrite,
    /// Report success without acting
    GiveUp,
    /// Report DestinationExists
    Fail,
}

impl ExistPolicy {
    /// Parse common string names into our ExistPolicy (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" | "replace" | "force" => Some(ExistPolicy::Overwrite),
            "give-up" | "giveup" | "skip" => Some(ExistPolicy::GiveUp),
            "fail" | "error" | "strict" => Some(ExistPolicy::Fail),
            _ => None,
        }
    }
}

impl fmt::Display for ExistPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExistPolicy::Overwrite => "overwrite",
            ExistPolicy::GiveUp => "give-up",
            ExistPolicy::Fail => "fail",
        };
        f.write_str(s)
    }
}

impl FromStr for ExistPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid exist policy: '{s}'"))
    }
}

/// Outcome of resolving a destination against an ExistPolicy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Destination is free (or was just cleared); continue with the operation.
    Proceed,
    /// GiveUp on an occupied destination: report success without acting.
    ShortCircuit,
}

/// Apply `policy` to `dst`. Occupancy is checked with symlink_metadata so a
/// dangling symlink still counts as occupied.
pub(crate) fn resolve_destination(dst: &Path, policy: ExistPolicy) -> Result<Resolution, FsError> {
    if std::fs::symlink_metadata(dst).is_err() {
        return Ok(Resolution::Proceed);
    }
    match policy {
        ExistPolicy::GiveUp => {
            debug!(path = %dst.display(), "destination occupied, giving up");
            Ok(Resolution::ShortCircuit)
        }
        ExistPolicy::Fail => Err(FsError::DestinationExists(dst.to_path_buf())),
        ExistPolicy::Overwrite => {
            debug!(path = %dst.display(), "destination occupied, overwriting");
            delete_recursive(dst)?;
            Ok(Resolution::Proceed)
        }
    }
}
