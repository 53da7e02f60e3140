//! Integration tests for threshold filtering.
//!
//! An entry is emitted exactly when its severity rank is less than or equal
//! to the threshold rank, whichever sink is selected.

use logging::{CallSite, LevelLogger, LoggerConfig, MemorySink, Severity};
use proptest::prelude::*;

fn capture(config: LoggerConfig) -> (LevelLogger, MemorySink, MemorySink) {
    let system = MemorySink::new();
    let console = MemorySink::new();
    let logger = LevelLogger::builder()
        .config(config)
        .system_sink(system.clone())
        .console_sink(console.clone())
        .build();
    (logger, system, console)
}

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

const SITE: CallSite<'static> = CallSite::new("run", "src/worker.rs", 40);

// ============================================================================
// Threshold Table
// ============================================================================

/// Verifies every severity/threshold pair against the rank rule.
#[test]
fn full_threshold_table() {
    for threshold in Severity::ALL {
        for severity in Severity::ALL {
            let (logger, _, console) =
                capture(LoggerConfig::development().with_threshold(threshold));
            logger.log("x", severity, &SITE);
            assert_eq!(
                console.len(),
                usize::from(severity.rank() <= threshold.rank()),
                "{severity} at threshold {threshold}"
            );
        }
    }
}

/// Verifies a debug threshold lets everything through.
#[test]
fn debug_threshold_emits_all_severities() {
    let (logger, _, console) = capture(LoggerConfig::development().with_threshold(Severity::Debug));
    for severity in Severity::ALL {
        logger.log(severity.name(), severity, &SITE);
    }
    let severities: Vec<_> = console.entries().iter().map(|e| e.severity).collect();
    assert_eq!(severities, Severity::ALL.to_vec());
}

/// Verifies a critical threshold only lets critical through.
#[test]
fn critical_threshold_emits_only_critical() {
    let (logger, _, console) =
        capture(LoggerConfig::development().with_threshold(Severity::Critical));
    for severity in Severity::ALL {
        logger.log(severity.name(), severity, &SITE);
    }
    assert_eq!(console.len(), 1);
    assert!(console.lines()[0].ends_with("🚨: critical"));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Emission on the console follows the rank rule.
    #[test]
    fn console_emits_iff_rank_within_threshold(
        threshold in severity(),
        severity in severity(),
        message in ".{0,40}",
    ) {
        let (logger, system, console) =
            capture(LoggerConfig::development().with_threshold(threshold));
        logger.log(&message, severity, &SITE);

        prop_assert!(system.is_empty());
        prop_assert_eq!(console.len(), usize::from(severity.rank() <= threshold.rank()));
    }

    /// Emission on the system sink follows the same rule in production mode.
    #[test]
    fn system_sink_emits_iff_rank_within_threshold(
        threshold in severity(),
        severity in severity(),
    ) {
        let (logger, system, console) = capture(
            LoggerConfig::production()
                .with_threshold(threshold)
                .with_system_sink(true),
        );
        logger.log("entry", severity, &SITE);

        prop_assert!(console.is_empty());
        prop_assert_eq!(system.len(), usize::from(severity.rank() <= threshold.rank()));
    }

    /// The emitted text is exactly the two-line rendering.
    #[test]
    fn emitted_text_matches_format(severity in severity(), message in "[a-z ]{0,30}") {
        let (logger, _, console) =
            capture(LoggerConfig::development().with_threshold(Severity::Debug));
        logger.log(&message, severity, &SITE);

        let expected = format!("worker.rs[40] - run\n{}: {}", severity.icon(), message);
        prop_assert_eq!(&console.lines()[0], &expected);
    }
}
