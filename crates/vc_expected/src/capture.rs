//! A process-wide [`log::Log`] that counts the diagnostics this crate emits.
//!
//! Tests run in parallel and share the logger, so callers compare counts
//! before and after an action instead of expecting exact values.

use alloc::string::ToString;
use core::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture;

static CAPTURE: Capture = Capture;
static VIOLATIONS: AtomicUsize = AtomicUsize::new(0);
static DEFAULTED: AtomicUsize = AtomicUsize::new(0);

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let message = record.args().to_string();
        let counter = match record.level() {
            Level::Error if message.starts_with("contract violation at ") => &VIOLATIONS,
            Level::Debug if message.starts_with("defaulted Expected<") => &DEFAULTED,
            _ => return,
        };
        counter.fetch_add(1, Ordering::SeqCst);
    }

    fn flush(&self) {}
}

/// Installs the logger once; later calls only reset the level filter.
pub(crate) fn install() {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Debug);
}

/// `log::error!` records for contract violations seen so far.
pub(crate) fn violations() -> usize {
    VIOLATIONS.load(Ordering::SeqCst)
}

/// `log::debug!` records for defaulted `Expected`s seen so far.
pub(crate) fn defaulted() -> usize {
    DEFAULTED.load(Ordering::SeqCst)
}
