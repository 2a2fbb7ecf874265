//! Application orchestrator.
//! Initializes logging, dispatches the subcommand to its library operation,
//! and reports the outcome.

use anyhow::Result;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info};

use fskit::cli::{Args, Command};
use fskit::output as out;
use fskit::{
    copy_tree, create_file_if_absent, delete_recursive, ensure_directory, is_file_opened,
    read_text, rename, with_file_lock, write_text, FsError, OpenState,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    init_tracing(&args.effective_log_level(), args.json);

    debug!("Starting fskit: {:?}", args);

    match dispatch(&args.command) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(kind = e.kind(), error = %e, "operation failed");
            out::error(&e.to_string());
            Err(e.into())
        }
    }
}

fn dispatch(command: &Command) -> Result<(), FsError> {
    match command {
        Command::Mkdir { path } => {
            ensure_directory(path)?;
            out::success(&format!("Directory ready: {}", path.display()));
            Ok(())
        }
        Command::Touch { path } => {
            create_file_if_absent(path)?;
            out::success(&format!("File ready: {}", path.display()));
            Ok(())
        }
        Command::Rm { path } => {
            delete_recursive(path)?;
            out::success(&format!("Deleted: {}", path.display()));
            Ok(())
        }
        Command::Cp { src, dst, policy } => {
            copy_tree(src, dst, *policy)?;
            out::success(&format!("Copied '{}' -> '{}'", src.display(), dst.display()));
            Ok(())
        }
        Command::Mv { src, dst, policy } => {
            rename(src, dst, *policy)?;
            info!(src = %src.display(), dst = %dst.display(), "Move completed");
            out::success(&format!("Moved '{}' -> '{}'", src.display(), dst.display()));
            Ok(())
        }
        Command::Check { path } => {
            match is_file_opened(path)? {
                OpenState::Open => out::line("open"),
                OpenState::NotOpen => out::line("not-open"),
            }
            Ok(())
        }
        Command::Lock { path, hold_ms } => {
            let held = Duration::from_millis(*hold_ms);
            with_file_lock(path, |p| {
                info!(path = %p.display(), hold_ms, "holding exclusive lock");
                thread::sleep(held);
            })?;
            out::success(&format!("Released lock on {}", path.display()));
            Ok(())
        }
        Command::Cat { path } => {
            let text = read_text(path)?;
            out::line(&text);
            Ok(())
        }
        Command::Write { path, text, policy } => {
            write_text(path, text, *policy)?;
            out::success(&format!(
                "Wrote {} bytes to {}",
                text.len(),
                path.display()
            ));
            Ok(())
        }
    }
}
