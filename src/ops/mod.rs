//! Filesystem operations.
//! Stateless free functions over paths: existence staging, recursive delete,
//! stream/file/tree copy, move with fallback, advisory locks, text helpers.

mod copy_file;
mod copy_tree;
mod ensure;
mod filename;
mod lock;
mod policy;
mod remove;
mod rename;
mod stream;
mod text;

pub use copy_file::copy_file;
pub use copy_tree::copy_tree;
pub use ensure::{create_file_if_absent, ensure_directory, ensure_parent_directory};
pub use filename::{is_file_name_valid, INVALID_FILE_NAME_CHARS};
pub use lock::{is_file_opened, with_file_lock, OpenState};
pub use policy::ExistPolicy;
pub use remove::delete_recursive;
pub use rename::rename;
pub use stream::{copy_stream, copy_stream_exact, copy_stream_with, ClosePolicy, COPY_BUF_SIZE};
pub use text::{read_text, read_text_from, write_text};
