//! crates/logging/src/registry.rs
//! Cached logger handles with atomic get-or-create semantics.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rustc_hash::FxBuildHasher;

use crate::abbrev::abbreviate;
use crate::report::{Reporter, StderrReporter};
use crate::resolve::LevelSource;
use crate::severity::{Severity, Threshold};

/// Resolved logger handle: an effective (possibly abbreviated) name plus the
/// severity floor resolved for the original category.
///
/// Handles are cheap to clone; all clones share one immutable allocation.
#[derive(Clone, Debug)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

#[derive(Debug)]
struct LoggerInner {
    effective_name: String,
    original_name: String,
    threshold: Threshold,
}

impl Logger {
    /// Creates a handle from its parts.
    ///
    /// Normally loggers come out of a [`LoggerRegistry`]; constructing one
    /// directly is useful when wiring a sink in isolation.
    #[must_use]
    pub fn new(effective_name: String, original_name: String, threshold: Threshold) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                effective_name,
                original_name,
                threshold,
            }),
        }
    }

    /// Returns the name used as the emission tag.
    #[must_use]
    pub fn effective_name(&self) -> &str {
        &self.inner.effective_name
    }

    /// Returns the category name the logger was requested under.
    #[must_use]
    pub fn original_name(&self) -> &str {
        &self.inner.original_name
    }

    /// Returns the resolved severity floor.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.inner.threshold
    }

    /// Returns `true` when a statement at `severity` should be emitted.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.inner.threshold.allows(severity)
    }

    /// Returns `true` when trace statements should be emitted.
    #[must_use]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Severity::Trace)
    }

    /// Returns `true` when debug statements should be emitted.
    #[must_use]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Severity::Debug)
    }

    /// Returns `true` when info statements should be emitted.
    #[must_use]
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(Severity::Info)
    }

    /// Returns `true` when warn statements should be emitted.
    #[must_use]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Severity::Warn)
    }

    /// Returns `true` when error statements should be emitted.
    #[must_use]
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(Severity::Error)
    }
}

/// Registry caching one [`Logger`] per effective name.
///
/// The cache is the only mutable shared state in the crate. Lookups that
/// miss run name abbreviation (when a tag limit is configured) and level
/// resolution exactly once, under the concurrent map's per-key entry lock,
/// so racing first-time requests for one name still construct a single
/// handle and readers never observe a partial entry. Entries live for the
/// registry's lifetime; category cardinality is bounded by the program's own
/// source structure, so nothing is ever evicted.
///
/// Two original names that abbreviate to the same effective name share one
/// entry: whichever resolved first fixes the severity. That approximation is
/// deliberate and mirrors the platform factory this design comes from.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{LevelConfig, LoggerRegistry, Severity, SilentReporter};
///
/// let config = LevelConfig::from_pairs(
///     [("root", "warn"), ("com.example", "debug")],
///     &SilentReporter,
/// );
/// let registry = LoggerRegistry::new(Arc::new(config)).with_tag_limit(23);
///
/// let logger = registry.get_logger("com.example.net.transport.Client");
/// assert!(logger.is_debug_enabled());
/// assert!(logger.effective_name().len() <= 23);
/// ```
pub struct LoggerRegistry {
    source: Arc<dyn LevelSource>,
    reporter: Arc<dyn Reporter>,
    cache: DashMap<String, Logger, FxBuildHasher>,
    tag_limit: Option<usize>,
}

impl LoggerRegistry {
    /// Creates a registry over a level source.
    ///
    /// Tags are initially unrestricted and diagnostics go to standard
    /// error; see [`with_tag_limit`](Self::with_tag_limit) and
    /// [`with_reporter`](Self::with_reporter).
    #[must_use]
    pub fn new(source: Arc<dyn LevelSource>) -> Self {
        Self {
            source,
            reporter: Arc::new(StderrReporter),
            cache: DashMap::default(),
            tag_limit: None,
        }
    }

    /// Enables name abbreviation against the given maximum tag length.
    ///
    /// Whether the platform requires abbreviation is a property of the
    /// runtime context, so it is injected here rather than probed.
    #[must_use]
    pub fn with_tag_limit(mut self, max_len: usize) -> Self {
        self.tag_limit = Some(max_len);
        self
    }

    /// Replaces the diagnostics reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Returns the configured tag limit, if abbreviation is required.
    #[must_use]
    pub const fn tag_limit(&self) -> Option<usize> {
        self.tag_limit
    }

    /// Returns the cached logger for a category, creating it on first use.
    ///
    /// The effective name is computed first (abbreviation only runs when a
    /// tag limit is configured); the cache is keyed by it. On a miss the
    /// severity floor is resolved for the **original** name, so resolution
    /// sees full specificity before any truncation. If abbreviation changed
    /// the name, one informational diagnostic notes the substitution.
    pub fn get_logger(&self, name: &str) -> Logger {
        let effective = match self.tag_limit {
            Some(max_len) => abbreviate(name, max_len),
            None => Cow::Borrowed(name),
        };

        // Fast path: shared read lock only.
        if let Some(existing) = self.cache.get(effective.as_ref()) {
            return existing.clone();
        }

        match self.cache.entry(effective.into_owned()) {
            Entry::Occupied(occupied) => occupied.get().clone(),
            Entry::Vacant(vacant) => {
                let effective_name = vacant.key().clone();
                if effective_name != name {
                    self.reporter.report(&format!(
                        "logger name `{name}` exceeds the tag limit, using `{effective_name}` instead"
                    ));
                }
                let threshold = self.source.threshold_for(name);
                let logger = Logger::new(effective_name, name.to_owned(), threshold);
                vacant.insert(logger.clone());
                logger
            }
        }
    }

    /// Returns the number of cached loggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` when no logger has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("tag_limit", &self.tag_limit)
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}
