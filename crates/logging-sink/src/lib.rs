#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` is the seam between the level-resolution core and the
//! platform channel that actually delivers log lines. The core decides the
//! emission tag (via abbreviation) and whether a statement is enabled (via
//! severity comparison); a [`PlatformSink`] consumes the resulting
//! `(priority, tag, message)` triple.
//!
//! # Design
//!
//! [`WriterSink`] renders triples as logcat-style `<letter>/<tag>: <message>`
//! lines into any [`std::io::Write`] implementor, with a [`LineMode`]
//! controlling the trailing newline. [`StderrSink`] is the best-effort
//! process-wide variant. The [`send`] helper couples a resolved
//! [`Logger`](logging::Logger) gate with a sink so callers do not repeat the
//! enablement check.
//!
//! # Invariants
//!
//! - Sinks never consult configuration; enablement was decided upstream.
//! - [`StderrSink`] swallows I/O failures: a broken diagnostics channel
//!   must never affect the caller.
//!
//! # Examples
//!
//! ```
//! use logging::Severity;
//! use logging_sink::{PlatformSink, WriterSink};
//!
//! let mut sink = WriterSink::new(Vec::new());
//! sink.emit(Severity::Info.priority(), "a.b.Client", "connected").unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "I/a.b.Client: connected\n");
//! ```

use std::io::{self, Write};

use logging::{Logger, Severity};

/// Controls whether a [`WriterSink`] appends a trailing newline per line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered line.
    #[default]
    WithNewline,
    /// Emit the rendered line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

/// Capability that delivers `(priority, tag, message)` triples to an
/// OS-level channel.
///
/// The numeric priority is the one produced by
/// [`Severity::priority`](logging::Severity::priority) or the disabled
/// sentinel; tags are expected to have been length-constrained upstream.
pub trait PlatformSink {
    /// Delivers one log line.
    fn emit(&mut self, priority: i32, tag: &str, message: &str) -> io::Result<()>;
}

/// Returns the logcat-style priority letter for a numeric priority.
///
/// Unknown priorities render as `?`, which keeps the sink total without
/// guessing at severities the core never produces.
#[must_use]
pub const fn priority_letter(priority: i32) -> char {
    match priority {
        2 => 'V',
        3 => 'D',
        4 => 'I',
        5 => 'W',
        6 => 'E',
        _ => '?',
    }
}

/// Sink that renders log lines into an [`io::Write`] target.
///
/// Each line has the shape `<letter>/<tag>: <message>`, the textual form of
/// the platform channel this design targets.
#[derive(Clone, Debug)]
pub struct WriterSink<W> {
    writer: W,
    line_mode: LineMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each line.
    #[must_use]
    pub fn new(writer: W) -> Self {
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

    /// Returns a shared reference to the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PlatformSink for WriterSink<W> {
    fn emit(&mut self, priority: i32, tag: &str, message: &str) -> io::Result<()> {
        let letter = priority_letter(priority);
        if self.line_mode.append_newline() {
            writeln!(self.writer, "{letter}/{tag}: {message}")
        } else {
            write!(self.writer, "{letter}/{tag}: {message}")
        }
    }
}

/// Best-effort sink writing logcat-style lines to standard error.
///
/// Delivery failures are discarded; the platform channel is advisory from
/// the core's point of view.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl PlatformSink for StderrSink {
    fn emit(&mut self, priority: i32, tag: &str, message: &str) -> io::Result<()> {
        let letter = priority_letter(priority);
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{letter}/{tag}: {message}");
        Ok(())
    }
}

/// Emits a message through `sink` if the logger enables `severity`.
///
/// Returns `true` when the message was handed to the sink. The tag is the
/// logger's effective name, so it already honors any platform length limit.
pub fn send<S: PlatformSink>(
    sink: &mut S,
    logger: &Logger,
    severity: Severity,
    message: &str,
) -> io::Result<bool> {
    if !logger.is_enabled(severity) {
        return Ok(false);
    }
    sink.emit(severity.priority(), logger.effective_name(), message)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::Threshold;

    fn logger(threshold: Threshold) -> Logger {
        Logger::new("a.b.Client".to_owned(), "a.b.Client".to_owned(), threshold)
    }

    #[test]
    fn writer_sink_renders_logcat_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit(Severity::Warn.priority(), "tag", "careful").unwrap();
        sink.emit(Severity::Error.priority(), "tag", "broken").unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "W/tag: careful\nE/tag: broken\n");
    }

    #[test]
    fn line_mode_without_newline_omits_terminator() {
        let mut sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.emit(Severity::Trace.priority(), "t", "fine").unwrap();
        assert_eq!(sink.into_inner(), b"V/t: fine".to_vec());
    }

    #[test]
    fn priority_letters_cover_all_severities() {
        assert_eq!(priority_letter(Severity::Trace.priority()), 'V');
        assert_eq!(priority_letter(Severity::Debug.priority()), 'D');
        assert_eq!(priority_letter(Severity::Info.priority()), 'I');
        assert_eq!(priority_letter(Severity::Warn.priority()), 'W');
        assert_eq!(priority_letter(Severity::Error.priority()), 'E');
        assert_eq!(priority_letter(logging::DISABLED_PRIORITY), '?');
    }

    #[test]
    fn send_respects_the_enablement_gate() {
        let mut sink = WriterSink::new(Vec::new());
        let logger = logger(Threshold::Minimum(Severity::Warn));

        assert!(!send(&mut sink, &logger, Severity::Info, "dropped").unwrap());
        assert!(send(&mut sink, &logger, Severity::Error, "kept").unwrap());

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "E/a.b.Client: kept\n");
    }

    #[test]
    fn send_through_off_threshold_emits_nothing() {
        let mut sink = WriterSink::new(Vec::new());
        let logger = logger(Threshold::Off);
        for severity in Severity::ALL {
            assert!(!send(&mut sink, &logger, severity, "never").unwrap());
        }
        assert!(sink.into_inner().is_empty());
    }
}
