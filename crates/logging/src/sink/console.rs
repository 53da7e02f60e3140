use std::io;

use logging_sink::MessageSink;

use super::EntrySink;
use crate::severity::Severity;

/// Development print sink: one newline-terminated entry per write on stdout.
///
/// Unlike `println!`, a closed or failing stdout is ignored instead of
/// panicking.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl EntrySink for ConsoleSink {
    fn emit(&self, _severity: Severity, entry: &str) {
        let mut sink = MessageSink::new(io::stdout().lock());
        let _ = sink.write(entry).and_then(|()| sink.flush());
    }
}
