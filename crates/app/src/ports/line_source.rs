//! Line source port — the subprocess's output stream as a sequence of lines.

use std::future::Future;
use std::io;

/// A lazy, unbounded, non-restartable sequence of text lines.
///
/// Each line is delivered at most once, in emission order, with no buffering
/// of history. `Ok(None)` means the underlying stream ended (the producer
/// terminated); the source never restarts it.
pub trait LineSource {
    /// Wait for and return the next line, or `None` at end of stream.
    fn next_line(&mut self) -> impl Future<Output = io::Result<Option<String>>> + Send;
}
