//! Console printing for user-facing results.
//! Prefixed, colored messages; colors apply only when the stream is a TTY.

use owo_colors::OwoColorize;

fn stdout_color() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_color() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn info(msg: &str) {
    if stdout_color() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn warn(msg: &str) {
    if stderr_color() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn error(msg: &str) {
    if stderr_color() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn success(msg: &str) {
    if stdout_color() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Plain line without a prefix, for primary outputs users may script against.
pub fn line(msg: &str) {
    println!("{}", msg);
}
