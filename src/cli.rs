//! CLI definition and parsing.
//! Defines Args/Command and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Each subcommand wraps one library operation for manual testing and
//!   scripting; `lock` exists so lock contention can be exercised from a
//!   second process.

use clap::{Parser, Subcommand, ValueHint};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::ops::ExistPolicy;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// CLI wrapper for the fskit library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Filesystem toolkit: ensure, copy, move, delete, lock"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a directory (and parents) if missing.
    Mkdir {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,
    },

    /// Create an empty file if missing (parents created as needed).
    Touch {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },

    /// Delete a file or a whole directory tree.
    Rm {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },

    /// Copy a file or directory tree.
    Cp {
        #[arg(value_hint = ValueHint::AnyPath)]
        src: PathBuf,
        #[arg(value_hint = ValueHint::AnyPath)]
        dst: PathBuf,
        /// Behavior when the destination exists: overwrite, give-up, fail.
        #[arg(long, default_value_t = ExistPolicy::Overwrite)]
        policy: ExistPolicy,
    },

    /// Move a file or directory (atomic rename with copy+delete fallback).
    Mv {
        #[arg(value_hint = ValueHint::AnyPath)]
        src: PathBuf,
        #[arg(value_hint = ValueHint::AnyPath)]
        dst: PathBuf,
        /// Behavior when the destination exists: overwrite, give-up, fail.
        #[arg(long, default_value_t = ExistPolicy::Overwrite)]
        policy: ExistPolicy,
    },

    /// Report whether a file is exclusively locked elsewhere (prints open / not-open).
    Check {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },

    /// Hold an exclusive lock on a file for a duration, then release it.
    Lock {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
        /// How long to hold the lock, in milliseconds.
        #[arg(long, default_value_t = 1000)]
        hold_ms: u64,
    },

    /// Print a file's text content.
    Cat {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },

    /// Write text into a file.
    Write {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
        text: String,
        /// Behavior when the destination exists: overwrite, give-up, fail.
        #[arg(long, default_value_t = ExistPolicy::Overwrite)]
        policy: ExistPolicy,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
