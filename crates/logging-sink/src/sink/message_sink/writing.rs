use super::MessageSink;
use crate::line_mode::LineMode;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    fn write_entry(&mut self, entry: &str, append_newline: bool) -> io::Result<()> {
        self.writer.write_all(entry.as_bytes())?;
        if append_newline {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Writes a single entry using the sink's current [`LineMode`].
    pub fn write(&mut self, entry: &str) -> io::Result<()> {
        self.write_entry(entry, self.line_mode.append_newline())
    }

    /// Writes `entry` using an explicit [`LineMode`] without mutating the sink.
    pub fn write_with_mode(&mut self, entry: &str, line_mode: LineMode) -> io::Result<()> {
        self.write_entry(entry, line_mode.append_newline())
    }

    /// Writes each entry from the iterator, stopping at the first error.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::MessageSink;
    ///
    /// let mut sink = MessageSink::new(Vec::new());
    /// sink.write_all(["one", "two", "three"])?;
    ///
    /// let output = String::from_utf8(sink.into_inner()).unwrap();
    /// assert_eq!(output.lines().count(), 3);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_all<I, S>(&mut self, entries: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let append_newline = self.line_mode.append_newline();
        for entry in entries {
            self.write_entry(entry.as_ref(), append_newline)?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_appends_newline_by_default() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write("a.rs[1] - f\n💬: hi").expect("write succeeds");
        assert_eq!(sink.into_inner(), "a.rs[1] - f\n💬: hi\n".as_bytes());
    }

    #[test]
    fn write_without_newline_preserves_entry() {
        let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.write("ready").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"ready".to_vec());
    }

    #[test]
    fn write_with_mode_leaves_configured_mode_untouched() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write_with_mode("x", LineMode::WithoutNewline)
            .expect("write succeeds");
        assert_eq!(sink.line_mode(), LineMode::WithNewline);
        sink.write("y").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"xy\n".to_vec());
    }

    #[test]
    fn write_empty_entry_still_terminates_line() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write("").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"\n".to_vec());
    }

    #[test]
    fn write_all_accepts_owned_strings() {
        let mut sink = MessageSink::new(Vec::new());
        let entries = vec![String::from("one"), String::from("two")];
        sink.write_all(entries).expect("batch write succeeds");
        assert_eq!(sink.into_inner(), b"one\ntwo\n".to_vec());
    }

    #[test]
    fn writer_errors_are_surfaced() {
        let mut sink = MessageSink::new(FailingWriter);
        let err = sink.write("lost").expect_err("write fails");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.flush().is_ok());
    }
}
