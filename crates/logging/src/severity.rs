//! crates/logging/src/severity.rs
//! Ordered severity levels and the enablement threshold type.

use std::fmt;
use std::str::FromStr;

/// Numeric platform priority assigned to categories with no applicable
/// configuration.
///
/// No [`Severity`] maps to a priority this high, so a root threshold of
/// [`Threshold::Off`] never enables anything.
pub const DISABLED_PRIORITY: i32 = i32::MAX;

/// Ordered severity of a log statement.
///
/// The variants form a total order (`Trace < Debug < Info < Warn < Error`)
/// and each maps to the numeric priority used by logcat-style platform
/// sinks. Enablement is a comparison: a statement at severity `s` is emitted
/// when the configured floor is at or below `s`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Finest-grained diagnostics.
    Trace,
    /// Developer-facing debugging output.
    Debug,
    /// Informational messages.
    Info,
    /// Recoverable problems.
    Warn,
    /// Errors.
    Error,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 5] = [Self::Trace, Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Returns the numeric platform priority for this severity.
    ///
    /// The values match the logcat channel's constants (`VERBOSE` = 2 up to
    /// `ERROR` = 6), so a sink can hand them to the platform unchanged.
    #[must_use]
    pub const fn priority(self) -> i32 {
        match self {
            Self::Trace => 2,
            Self::Debug => 3,
            Self::Info => 4,
            Self::Warn => 5,
            Self::Error => 6,
        }
    }

    /// Returns the lowercase configuration label for this severity.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Parses a configuration label, matching case-insensitively.
    ///
    /// Returns `None` for labels outside the fixed
    /// `trace|debug|info|warn|error` set; callers decide whether that is a
    /// reportable condition.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|severity| label.eq_ignore_ascii_case(severity.label()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a severity label is not recognized.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognized severity label `{label}`")]
pub struct SeverityParseError {
    label: String,
}

impl SeverityParseError {
    /// Returns the offending label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl FromStr for Severity {
    type Err = SeverityParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_label(text).ok_or_else(|| SeverityParseError {
            label: text.to_owned(),
        })
    }
}

/// Minimum-severity floor applied to a category.
///
/// `Minimum(s)` enables every severity at or above `s`; [`Threshold::Off`]
/// is the sentinel used when no configuration applies anywhere along a
/// category's ancestor chain, and enables nothing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Threshold {
    /// Emit statements at or above the contained severity.
    Minimum(Severity),
    /// Emit nothing.
    Off,
}

impl Threshold {
    /// Returns `true` when a statement at `severity` should be emitted.
    #[must_use]
    pub fn allows(self, severity: Severity) -> bool {
        self.priority() <= severity.priority()
    }

    /// Returns the numeric platform priority of the floor.
    ///
    /// [`Threshold::Off`] maps to [`DISABLED_PRIORITY`].
    #[must_use]
    pub const fn priority(self) -> i32 {
        match self {
            Self::Minimum(severity) => severity.priority(),
            Self::Off => DISABLED_PRIORITY,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimum(severity) => severity.fmt(f),
            Self::Off => f.write_str("off"),
        }
    }
}

impl From<Severity> for Threshold {
    fn from(severity: Severity) -> Self {
        Self::Minimum(severity)
    }
}
