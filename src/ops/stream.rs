//! Streaming byte copy.
//!
//! Behavior:
//! - All copies go through a fixed 8 KiB buffer and flush the writer before
//!   returning the byte count.
//! - copy_stream borrows both streams; the caller keeps them open.
//! - copy_stream_with takes ownership and applies a ClosePolicy per stream:
//!   Close drops the handle on every exit path, DoNotClose hands it back.

use std::io::{self, Read, Write};

/// Chunk size used by every stream copy.
pub const COPY_BUF_SIZE: usize = 8 * 1024;

/// Whether a policy-aware copy consumes (drops) a stream or returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosePolicy {
    /// Drop the stream when the copy finishes, on success and error alike.
    #[default]
    Close,
    /// Hand the stream back to the caller for further use.
    DoNotClose,
}

/// Copy `reader` to EOF into `writer`, returning the number of bytes moved.
pub fn copy_stream<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; COPY_BUF_SIZE];
    let mut total: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }
    writer.flush()?;
    Ok(total)
}

/// Policy-aware copy over owned streams.
///
/// The returned options carry back the streams configured DoNotClose; a
/// Close stream has been dropped by the time this returns, whether the copy
/// succeeded or not.
pub fn copy_stream_with<R, W>(
    mut reader: R,
    mut writer: W,
    reader_policy: ClosePolicy,
    writer_policy: ClosePolicy,
) -> (io::Result<u64>, Option<R>, Option<W>)
where
    R: Read,
    W: Write,
{
    let result = copy_stream(&mut reader, &mut writer);
    let reader_back = match reader_policy {
        ClosePolicy::Close => None,
        ClosePolicy::DoNotClose => Some(reader),
    };
    let writer_back = match writer_policy {
        ClosePolicy::Close => None,
        ClosePolicy::DoNotClose => Some(writer),
    };
    (result, reader_back, writer_back)
}

/// Copy exactly `length` bytes from `reader` into `writer`.
/// A reader that ends early yields UnexpectedEof.
pub fn copy_stream_exact<R, W>(reader: &mut R, writer: &mut W, length: u64) -> io::Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; COPY_BUF_SIZE];
    let mut remaining = length;
    while remaining > 0 {
        let want = remaining.min(COPY_BUF_SIZE as u64) as usize;
        let n = match reader.read(&mut buf[..want]) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("stream ended with {remaining} bytes still expected"),
                ));
            }
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        remaining -= n as u64;
    }
    writer.flush()?;
    Ok(())
}
