//! crates/logging/src/report.rs
//! Best-effort diagnostics channel for configuration and registry notices.

use std::io::{self, Write};
use std::sync::Mutex;

/// Side channel for configuration warnings and abbreviation notices.
///
/// Reporting is strictly best-effort: implementations must swallow their own
/// I/O failures, and nothing in level resolution or tag abbreviation depends
/// on a report having been delivered. Reports carry no structured payload
/// beyond the rendered text.
pub trait Reporter: Send + Sync {
    /// Delivers one diagnostic line.
    fn report(&self, message: &str);
}

/// Reporter that writes each diagnostic as a line on standard error.
///
/// Write errors are discarded; a broken stderr must never affect the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&self, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "taglog: {message}");
    }
}

/// Reporter that discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _message: &str) {}
}

/// Reporter that collects diagnostics into an in-memory buffer.
///
/// Useful wherever the diagnostics belong to the caller rather than the
/// process: embedding hosts that surface warnings in their own UI, and tests
/// asserting on what was reported.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    messages: Mutex<Vec<String>>,
}

impl CollectingReporter {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the collected diagnostics in delivery order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Removes and returns all collected diagnostics.
    pub fn drain(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut messages| messages.drain(..).collect())
            .unwrap_or_default()
    }

    /// Returns `true` when nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages
            .lock()
            .map(|messages| messages.is_empty())
            .unwrap_or(true)
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_owned());
        }
    }
}

/// Reporter that forwards diagnostics as `tracing` warnings.
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

#[cfg(feature = "tracing")]
impl Reporter for TracingReporter {
    fn report(&self, message: &str) {
        tracing::warn!(target: "taglog::config", "{message}");
    }
}
