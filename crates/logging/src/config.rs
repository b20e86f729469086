//! crates/logging/src/config.rs
//! Immutable prefix-to-severity configuration store.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::properties::parse_properties;
use crate::report::Reporter;
use crate::severity::{Severity, Threshold};

/// Reserved configuration key holding the default (root) severity.
pub const ROOT_KEY: &str = "root";

/// Immutable mapping from category prefix to minimum severity.
///
/// Built once from parsed key/value pairs and read-only afterwards, which
/// makes it safe to share across threads without synchronization. Every key
/// other than [`ROOT_KEY`] is treated as a literal category prefix; values
/// are severity labels matched case-insensitively.
///
/// Malformed input never fails the load. An unrecognized severity label
/// drops that entry with a diagnostic on the supplied [`Reporter`]; a
/// missing root key leaves the root at [`Threshold::Off`], again with a
/// diagnostic.
///
/// # Examples
///
/// ```
/// use logging::{LevelConfig, Severity, SilentReporter, Threshold};
///
/// let pairs = [
///     ("root".to_owned(), "warn".to_owned()),
///     ("org.slf4j".to_owned(), "info".to_owned()),
/// ];
/// let config = LevelConfig::from_pairs(pairs, &SilentReporter);
///
/// assert_eq!(config.root(), Threshold::Minimum(Severity::Warn));
/// assert_eq!(config.prefix_severity("org.slf4j"), Some(Severity::Info));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LevelConfig {
    prefixes: FxHashMap<String, Severity>,
    root: Threshold,
}

impl Default for LevelConfig {
    /// An empty store: no prefixes, root [`Threshold::Off`].
    fn default() -> Self {
        Self {
            prefixes: FxHashMap::default(),
            root: Threshold::Off,
        }
    }
}

impl LevelConfig {
    /// Builds a store from raw key/value pairs.
    ///
    /// The [`ROOT_KEY`] pair sets the root threshold; every other key is a
    /// category prefix. Later pairs overwrite earlier ones for the same key.
    /// Unrecognized severity labels are dropped and reported, so a bad entry
    /// falls through to ancestor or root resolution at query time.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I, reporter: &dyn Reporter) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut prefixes = FxHashMap::default();
        let mut root = None;

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref();
            match Severity::from_label(value) {
                Some(severity) if key == ROOT_KEY => root = Some(severity),
                Some(severity) => {
                    prefixes.insert(key.to_owned(), severity);
                }
                None => {
                    reporter.report(&format!(
                        "wrong severity label `{value}` for category `{key}`"
                    ));
                }
            }
        }

        let root = match root {
            Some(severity) => Threshold::Minimum(severity),
            None => {
                reporter.report("default severity undefined, logging is disabled by default");
                Threshold::Off
            }
        };

        Self { prefixes, root }
    }

    /// Builds a store from properties-format text.
    #[must_use]
    pub fn from_properties_str(text: &str, reporter: &dyn Reporter) -> Self {
        Self::from_pairs(parse_properties(text), reporter)
    }

    /// Loads a store from a properties file.
    ///
    /// A missing or unreadable file is not fatal: the returned store has no
    /// prefixes and a root of [`Threshold::Off`], and the failure is
    /// reported on the diagnostics channel.
    #[must_use]
    pub fn load_path(path: &Path, reporter: &dyn Reporter) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_properties_str(&text, reporter),
            Err(error) => {
                reporter.report(&format!(
                    "can't load logger configuration {}: {error}",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    /// Returns the root (default) threshold.
    #[must_use]
    pub const fn root(&self) -> Threshold {
        self.root
    }

    /// Returns the severity configured for an exact prefix string, if any.
    #[must_use]
    pub fn prefix_severity(&self, prefix: &str) -> Option<Severity> {
        self.prefixes.get(prefix).copied()
    }

    /// Returns the number of configured prefixes (the root is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns `true` when no prefixes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
