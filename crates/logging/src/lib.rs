#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` resolves, for hierarchically named logger categories
//! (`com.example.net.Client`), the minimum severity that should be emitted,
//! and deterministically abbreviates names that exceed a platform-imposed
//! tag length. Two leaf algorithms compose around one small cache:
//!
//! - [`LevelConfig`] holds the prefix-to-severity map and the root default,
//!   built once from key/value pairs and immutable afterwards;
//! - [`LevelSource::threshold_for`] walks ancestor prefixes by iterative
//!   substring truncation, most specific first;
//! - [`abbreviate`] shortens over-long names while keeping the final,
//!   most identifying segment whole;
//! - [`LoggerRegistry`] caches one [`Logger`] handle per effective name
//!   with atomic get-or-create.
//!
//! # Design
//!
//! Configuration is explicit state, constructed by the caller and passed
//! into the registry, never a hidden process-wide singleton; isolated tests
//! run distinct configurations side by side. All diagnostics (unrecognized
//! labels, missing root, tag substitutions) flow through the best-effort
//! [`Reporter`] channel and are never fatal.
//!
//! # Invariants
//!
//! - [`LevelConfig`] is read-only after construction and safe for
//!   unsynchronized concurrent reads.
//! - At most one [`Logger`] is ever created per effective name, even under
//!   concurrent first-time lookups.
//! - Resolution always sees the original, unabbreviated name.
//! - [`abbreviate`] is total, deterministic, and idempotent; its result
//!   never exceeds the requested limit for limits of at least one.
//!
//! # Errors
//!
//! Nothing in this crate is fatal. Configuration-load failures fall back to
//! an everything-disabled root; bad severity labels drop the one entry;
//! degenerate names produce best-effort tags. The only `Result`-bearing
//! surface is [`Severity`]'s [`FromStr`](std::str::FromStr), for callers
//! that want strict label parsing.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{LevelConfig, LoggerRegistry, Severity, SilentReporter};
//!
//! let config = LevelConfig::from_properties_str(
//!     "root = warn\norg.slf4j = info\norg.slf4j.impl = debug\n",
//!     &SilentReporter,
//! );
//! let registry = LoggerRegistry::new(Arc::new(config)).with_tag_limit(23);
//!
//! let logger = registry.get_logger("org.slf4j.impl.other");
//! assert!(logger.is_debug_enabled());
//!
//! let other = registry.get_logger("any.category");
//! assert!(other.is_warn_enabled());
//! assert!(!other.is_info_enabled());
//! ```

mod abbrev;
mod config;
mod properties;
mod registry;
mod report;
mod resolve;
mod severity;

pub use crate::abbrev::{MAX_TAG_LENGTH, abbreviate};
pub use crate::config::{LevelConfig, ROOT_KEY};
pub use crate::properties::parse_properties;
pub use crate::registry::{Logger, LoggerRegistry};
pub use crate::report::{CollectingReporter, Reporter, SilentReporter, StderrReporter};
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use crate::report::TracingReporter;
pub use crate::resolve::LevelSource;
pub use crate::severity::{DISABLED_PRIORITY, Severity, SeverityParseError, Threshold};
