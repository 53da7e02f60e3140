//! Integration tests for the call-site capturing macros.

use logging::{
    CallSite, LevelLogger, LoggerConfig, MemorySink, RecordingHalt, Severity, call_site, log,
    log_and_fail, log_assert,
};

struct Capture {
    logger: LevelLogger,
    console: MemorySink,
    halts: RecordingHalt,
}

fn capture(threshold: Severity) -> Capture {
    let console = MemorySink::new();
    let halts = RecordingHalt::new();
    let logger = LevelLogger::builder()
        .config(LoggerConfig::development().with_threshold(threshold))
        .console_sink(console.clone())
        .halt(halts.clone())
        .build();
    Capture {
        logger,
        console,
        halts,
    }
}

// ============================================================================
// call_site!
// ============================================================================

/// Verifies the macro reports the enclosing function, file and line.
#[test]
fn call_site_reports_enclosing_function() {
    let site: CallSite<'static> = call_site!();
    let line = line!() - 1;

    assert_eq!(site.function(), "call_site_reports_enclosing_function");
    assert_eq!(site.file_base_name(), "macros.rs");
    assert_eq!(site.line(), line);
}

/// Verifies closures report the function that defines them.
#[test]
fn call_site_inside_closure_reports_outer_function() {
    let capture = || call_site!();
    let site = capture();

    assert_eq!(site.function(), "call_site_inside_closure_reports_outer_function");
}

// ============================================================================
// log!
// ============================================================================

/// Verifies the macro renders the full two-line entry.
#[test]
fn log_renders_entry_with_call_site() {
    let capture = capture(Severity::Info);

    log!(logger: &capture.logger, level: Severity::Error, "code {}", 42);
    let line = line!() - 1;

    assert_eq!(
        capture.console.lines(),
        vec![format!(
            "macros.rs[{line}] - log_renders_entry_with_call_site\n📛: code 42"
        )]
    );
}

/// Verifies the severity defaults to info.
#[test]
fn log_defaults_to_info() {
    let capture = capture(Severity::Info);

    log!(logger: &capture.logger, "plain");

    let entries = capture.console.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Info);
    assert!(entries[0].text.ends_with("\n💬: plain"));
}

/// Verifies filtered entries are not rendered.
#[test]
fn log_respects_threshold() {
    let capture = capture(Severity::Warning);

    log!(logger: &capture.logger, "info is filtered");
    log!(logger: &capture.logger, level: Severity::Debug, "debug is filtered");
    log!(logger: &capture.logger, level: Severity::Warning, "warning passes");

    assert_eq!(capture.console.len(), 1);
}

/// Verifies the logger expression may be an owned smart pointer.
#[test]
fn log_accepts_arc_logger() {
    let capture = capture(Severity::Info);
    let console = capture.console.clone();
    let logger = std::sync::Arc::new(capture.logger);

    log!(logger: logger, level: Severity::Critical, "via arc");

    assert!(console.lines()[0].ends_with("🚨: via arc"));
}

// ============================================================================
// log_and_fail! / log_assert!
// ============================================================================

/// Verifies log_and_fail logs and halts with the same call site.
#[test]
fn log_and_fail_records_halt() {
    let capture = capture(Severity::Info);

    log_and_fail!(logger: &capture.logger, level: Severity::Critical, "state {}", "bad");
    let line = line!() - 1;

    assert_eq!(capture.console.len(), 1);
    let reports = capture.halts.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].message(), "state bad");
    assert_eq!(reports[0].severity(), Severity::Critical);
    assert_eq!(reports[0].call_site().line(), line);
    assert_eq!(reports[0].call_site().function(), "log_and_fail_records_halt");
}

/// Verifies a passing assertion neither logs nor halts.
#[test]
fn log_assert_true_is_silent() {
    let capture = capture(Severity::Debug);

    log_assert!(logger: &capture.logger, 1 + 1 == 2, "math broke");

    assert!(capture.console.is_empty());
    assert_eq!(capture.halts.count(), 0);
}

/// Verifies a failing assertion logs and halts.
#[test]
fn log_assert_false_logs_and_halts() {
    let capture = capture(Severity::Info);
    let items: Vec<u8> = Vec::new();

    log_assert!(
        logger: &capture.logger,
        !items.is_empty(),
        level: Severity::Error,
        "expected items, got {}",
        items.len()
    );

    assert!(capture.console.lines()[0].ends_with("📛: expected items, got 0"));
    assert_eq!(capture.halts.count(), 1);
}

/// Verifies the failure message is only formatted when the assertion fails.
#[test]
fn log_assert_formats_lazily() {
    use std::cell::Cell;

    struct Counted<'a>(&'a Cell<u32>);

    impl std::fmt::Display for Counted<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("counted")
        }
    }

    let capture = capture(Severity::Info);
    let formatted = Cell::new(0);

    log_assert!(logger: &capture.logger, true, "{}", Counted(&formatted));
    assert_eq!(formatted.get(), 0);

    log_assert!(logger: &capture.logger, false, "{}", Counted(&formatted));
    assert_eq!(formatted.get(), 1);
}
