use crate::line_mode::LineMode;

/// Streaming sink that writes pre-formatted log entries into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with the [`LineMode`] that
/// decides whether each entry is newline-terminated. It carries no other
/// state, so moving it between owners (or wrapping it in a `Mutex` to share it
/// across threads) is cheap.
///
/// # Examples
///
/// Collect entries into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logging_sink::MessageSink;
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write("first")?;
/// sink.write("second")?;
///
/// assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Override the newline policy for a single entry:
///
/// ```
/// use logging_sink::{LineMode, MessageSink};
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write_with_mode("partial", LineMode::WithoutNewline)?;
/// sink.write(" line")?;
///
/// assert_eq!(sink.into_inner(), b"partial line\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
}

mod constructors;
mod writing;
