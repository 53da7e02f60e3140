use std::fmt;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use logging_sink::{LineMode, MessageSink};

use super::EntrySink;
use crate::severity::Severity;

/// Sink that writes entries to an arbitrary [`Write`] implementor.
///
/// Writes are serialized through a mutex; a poisoned lock is recovered rather
/// than propagated.
///
/// ```
/// use logging::{EntrySink, Severity, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.emit(Severity::Info, "a.rs[1] - f\n💬: one");
/// assert_eq!(sink.into_inner(), "a.rs[1] - f\n💬: one\n".as_bytes());
/// ```
pub struct WriterSink<W> {
    inner: Mutex<MessageSink<W>>,
}

impl<W> WriterSink<W> {
    /// Wraps `writer`, newline-terminating each entry.
    pub const fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Wraps `writer` with an explicit [`LineMode`].
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            inner: Mutex::new(MessageSink::with_line_mode(writer, line_mode)),
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_inner()
    }
}

impl<W> EntrySink for WriterSink<W>
where
    W: Write + Send,
{
    fn emit(&self, _severity: Severity, entry: &str) {
        let mut sink = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.write(entry);
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink").finish_non_exhaustive()
    }
}
