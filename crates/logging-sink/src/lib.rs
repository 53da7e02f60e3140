#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output primitives used by the `logging` crate:
//! a [`MessageSink`] that streams pre-formatted log entries into any
//! [`std::io::Write`] implementor, and (on Unix) a thin [`syslog`] backend
//! over `openlog(3)`/`syslog(3)`/`closelog(3)`.
//!
//! # Design
//!
//! The crate knows nothing about severities, thresholds or call sites. It only
//! decides *where* bytes go and whether each entry is terminated with a
//! newline ([`LineMode`]). Filtering and formatting live one layer up.
//!
//! # Invariants
//!
//! - [`MessageSink`] writes the entry bytes verbatim; it never rewrites or
//!   escapes the payload.
//! - `LineMode::WithNewline` appends exactly one `\n` after each entry.
//!
//! # Errors
//!
//! All writer-backed operations surface [`std::io::Error`] values originating
//! from the underlying writer. The syslog backend has no error channel:
//! entries that cannot be converted to C strings are dropped.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{LineMode, MessageSink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write("main.rs[3] - main\n💬: ready")?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "main.rs[3] - main\n💬: ready\n");
//!
//! let mut raw = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
//! raw.write("no terminator")?;
//! assert_eq!(raw.into_inner(), b"no terminator".to_vec());
//! # Ok::<(), std::io::Error>(())
//! ```

mod line_mode;
mod sink;

#[cfg(unix)]
#[allow(unsafe_code)]
pub mod syslog;

pub use line_mode::LineMode;
pub use sink::MessageSink;
