//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` ecosystem into a [`LevelLogger`].
//!
//! [`LevelLayer`] is a `tracing-subscriber` layer that turns every event into
//! a [`LevelLogger::log`] call, so libraries instrumented with `tracing`
//! share the logger's threshold, format and sink selection.
//!
//! # Mapping
//!
//! | tracing level | severity  |
//! |---------------|-----------|
//! | `ERROR`       | `Error`   |
//! | `WARN`        | `Warning` |
//! | `INFO`        | `Info`    |
//! | `DEBUG`       | `Debug`   |
//! | `TRACE`       | `Debug`   |
//!
//! The call site uses the event's module path (falling back to its target) as
//! the function name, plus its file and line when known. Only the `message`
//! field is rendered; events without one are skipped.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{init_tracing, shared};
//!
//! init_tracing(shared::logger())?;
//! tracing::warn!("cache miss for {}", key);
//! ```

use std::ops::Deref;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::call_site::CallSite;
use crate::logger::LevelLogger;
use crate::severity::Severity;

/// A tracing layer that forwards events to a [`LevelLogger`].
///
/// `L` is any handle that derefs to the logger: `&'static LevelLogger` (for
/// the [`shared`](crate::shared) instance) or `Arc<LevelLogger>`.
#[derive(Debug, Clone)]
pub struct LevelLayer<L> {
    logger: L,
}

impl<L> LevelLayer<L>
where
    L: Deref<Target = LevelLogger>,
{
    /// Creates a layer forwarding to `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a severity.
    pub(crate) const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl<S, L> Layer<S> for LevelLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Deref<Target = LevelLogger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity_for(metadata.level());
        if !self.logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let call_site = CallSite::new(
            metadata.module_path().unwrap_or_else(|| metadata.target()),
            metadata.file().unwrap_or_default(),
            metadata.line().unwrap_or_default(),
        );
        self.logger.log(&message, severity, &call_site);
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that forwards every event to
/// `logger`.
///
/// Fails if a global default subscriber is already set.
pub fn init_tracing<L>(logger: L) -> Result<(), TryInitError>
where
    L: Deref<Target = LevelLogger> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LevelLayer::new(logger))
        .try_init()
}

/// Like [`init_tracing`], with an additional filter layer (for example an
/// `EnvFilter`) placed in front of the bridge.
///
/// ```rust,ignore
/// use logging::{init_tracing_with_filter, shared};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(shared::logger(), EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<L, F>(logger: L, filter: F) -> Result<(), TryInitError>
where
    L: Deref<Target = LevelLogger> + Send + Sync + 'static,
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LevelLayer::new(logger))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerConfig;
    use crate::sink::MemorySink;
    use std::sync::Arc;
    use tracing_subscriber::layer::SubscriberExt;

    fn bridged(threshold: Severity) -> (Arc<LevelLogger>, MemorySink) {
        let console = MemorySink::new();
        let logger = LevelLogger::builder()
            .config(LoggerConfig::development().with_threshold(threshold))
            .console_sink(console.clone())
            .build();
        (Arc::new(logger), console)
    }

    #[test]
    fn test_severity_for() {
        type Bridge = LevelLayer<Arc<LevelLogger>>;
        assert_eq!(Bridge::severity_for(&Level::ERROR), Severity::Error);
        assert_eq!(Bridge::severity_for(&Level::WARN), Severity::Warning);
        assert_eq!(Bridge::severity_for(&Level::INFO), Severity::Info);
        assert_eq!(Bridge::severity_for(&Level::DEBUG), Severity::Debug);
        assert_eq!(Bridge::severity_for(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn events_are_rendered_with_module_path_and_file() {
        let (logger, console) = bridged(Severity::Info);
        let subscriber = tracing_subscriber::registry().with(LevelLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("disk {} failed", 2);
        });

        let entries = console.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Error);
        let text = &entries[0].text;
        assert!(text.starts_with("tracing_bridge.rs["), "{text}");
        assert!(
            text.contains("] - logging::tracing_bridge::tests\n"),
            "{text}"
        );
        assert!(text.ends_with("📛: disk 2 failed"), "{text}");
    }

    #[test]
    fn events_above_threshold_are_dropped() {
        let (logger, console) = bridged(Severity::Warning);
        let subscriber = tracing_subscriber::registry().with(LevelLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("chatty");
            tracing::trace!("very chatty");
            tracing::warn!("kept");
        });

        assert_eq!(console.len(), 1);
        assert!(console.lines()[0].ends_with("⚠️: kept"));
    }

    #[test]
    fn events_without_message_are_skipped() {
        let (logger, console) = bridged(Severity::Debug);
        let subscriber = tracing_subscriber::registry().with(LevelLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(bytes = 12);
        });

        assert!(console.is_empty());
    }
}
