//! Core library for `fskit`.
//!
//! A small filesystem toolkit: directory/file staging, recursive delete,
//! stream/file/tree copy, move with fallback, text helpers, and advisory
//! file locking, exposed as stateless free functions over `std::path::Path`.
//! Expected failures come back as a typed status (`FsError`); no operation
//! panics across this boundary.

pub mod cli;
pub mod errors;
pub mod ops;
pub mod output;

pub use cli::LogLevel;
pub use errors::FsError;
pub use ops::{
    copy_file, copy_stream, copy_stream_exact, copy_stream_with, copy_tree,
    create_file_if_absent, delete_recursive, ensure_directory, ensure_parent_directory,
    is_file_name_valid, is_file_opened, read_text, read_text_from, rename, with_file_lock,
    write_text, ClosePolicy, ExistPolicy, OpenState, COPY_BUF_SIZE, INVALID_FILE_NAME_CHARS,
};
