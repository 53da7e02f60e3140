use super::MessageSink;
use crate::line_mode::LineMode;
use std::mem;

impl<W> MessageSink<W> {
    /// Creates a new sink that appends a newline after each entry.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Replaces the underlying writer while keeping the sink's [`LineMode`].
    ///
    /// The previous writer is handed back so buffered output can be inspected
    /// or flushed before it is dropped.
    #[must_use = "the returned writer contains entries written before the replacement"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_newline_mode() {
        let sink = MessageSink::new(Vec::<u8>::new());
        assert_eq!(sink.line_mode(), LineMode::WithNewline);
    }

    #[test]
    fn set_line_mode_is_observable() {
        let mut sink = MessageSink::new(Vec::<u8>::new());
        sink.set_line_mode(LineMode::WithoutNewline);
        assert_eq!(sink.line_mode(), LineMode::WithoutNewline);
    }

    #[test]
    fn replace_writer_returns_previous_buffer() {
        let mut sink = MessageSink::new(b"old".to_vec());
        let previous = sink.replace_writer(Vec::new());
        assert_eq!(previous, b"old".to_vec());
        assert!(sink.get_ref().is_empty());
    }

    #[test]
    fn default_wraps_default_writer() {
        let sink: MessageSink<Vec<u8>> = MessageSink::default();
        assert!(sink.into_inner().is_empty());
    }
}
