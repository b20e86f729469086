//! Integration tests for configuration loading.
//!
//! Exercises the full path from properties text and files to a usable
//! store, including every non-fatal degradation: missing files, missing
//! root, unrecognized labels.

use std::io::Write;

use logging::{CollectingReporter, LevelConfig, LevelSource, Severity, Threshold};
use tempfile::NamedTempFile;

/// Verifies a complete properties file loads into a working store.
#[test]
fn full_properties_file_loads() {
    let mut file = NamedTempFile::new().expect("create temp config");
    write!(
        file,
        "# logger configuration\n\
         root = warn\n\
         org.slf4j = info\n\
         org.slf4j.impl = debug\n"
    )
    .expect("write temp config");
    file.flush().expect("flush temp config");

    let reporter = CollectingReporter::new();
    let config = LevelConfig::load_path(file.path(), &reporter);

    assert!(reporter.is_empty());
    assert_eq!(config.root(), Threshold::Minimum(Severity::Warn));
    assert_eq!(
        config.threshold_for("org.slf4j.impl.Runtime"),
        Threshold::Minimum(Severity::Debug)
    );
}

/// Verifies a missing file degrades to a fully disabled store with one
/// diagnostic, never an error.
#[test]
fn missing_file_degrades_to_disabled() {
    let reporter = CollectingReporter::new();
    let config = LevelConfig::load_path(
        std::path::Path::new("/definitely/not/here.properties"),
        &reporter,
    );

    assert_eq!(config.root(), Threshold::Off);
    assert!(config.is_empty());
    assert_eq!(reporter.messages().len(), 1);
    assert!(!config.threshold_for("anything").allows(Severity::Error));
}

/// Verifies a bad label drops only the offending entry.
#[test]
fn bad_label_drops_only_that_entry() {
    let reporter = CollectingReporter::new();
    let config = LevelConfig::from_properties_str(
        "root = info\ngood.category = trace\nbad.category = shouty\n",
        &reporter,
    );

    assert_eq!(
        config.threshold_for("good.category"),
        Threshold::Minimum(Severity::Trace)
    );
    // The bad entry is absent, so its category resolves through the root.
    assert_eq!(
        config.threshold_for("bad.category"),
        Threshold::Minimum(Severity::Info)
    );
    assert_eq!(reporter.messages().len(), 1);
    assert!(reporter.messages()[0].contains("shouty"));
}

/// Verifies a missing root is reported and defaults to off.
#[test]
fn missing_root_is_reported() {
    let reporter = CollectingReporter::new();
    let config = LevelConfig::from_properties_str("com.example = debug\n", &reporter);

    assert_eq!(config.root(), Threshold::Off);
    assert_eq!(
        config.threshold_for("com.example.Client"),
        Threshold::Minimum(Severity::Debug)
    );
    assert_eq!(config.threshold_for("unrelated"), Threshold::Off);
    assert_eq!(reporter.messages().len(), 1);
}

/// Verifies comments, blank lines, and colon separators all parse.
#[test]
fn lenient_properties_syntax() {
    let reporter = CollectingReporter::new();
    let config = LevelConfig::from_properties_str(
        "! header comment\n\n# another\nroot: error\n  spaced.key  =  warn  \n",
        &reporter,
    );

    assert!(reporter.is_empty());
    assert_eq!(config.root(), Threshold::Minimum(Severity::Error));
    assert_eq!(config.prefix_severity("spaced.key"), Some(Severity::Warn));
}

/// Verifies the loaded store answers unsynchronized concurrent reads.
#[test]
fn loaded_store_is_share_safe() {
    use std::sync::Arc;
    use std::thread;

    let config = Arc::new(LevelConfig::from_properties_str(
        "root = warn\na.b = debug\n",
        &CollectingReporter::new(),
    ));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let config = Arc::clone(&config);
        handles.push(thread::spawn(move || {
            for _ in 0..64 {
                assert_eq!(
                    config.threshold_for("a.b.c"),
                    Threshold::Minimum(Severity::Debug)
                );
            }
        }));
    }
    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
}
