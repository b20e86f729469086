//! src/bin/client.rs
//! Command-line front end: inspect resolved levels and effective tags.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use logging::{
    LevelConfig, Logger, LoggerRegistry, MAX_TAG_LENGTH, Severity, StderrReporter,
};
use logging_sink::{WriterSink, send};

/// Inspect hierarchical log-level resolution and tag abbreviation.
#[derive(Debug, Parser)]
#[command(name = "taglog", version, about)]
struct Args {
    /// Properties file mapping category prefixes to severities.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum tag length enforced by abbreviation.
    #[arg(long, value_name = "LEN", default_value_t = MAX_TAG_LENGTH)]
    tag_limit: usize,

    /// Leave tags unabbreviated regardless of length.
    #[arg(long)]
    no_abbrev: bool,

    /// Emit MESSAGE at LEVEL through each category's logger.
    #[arg(long, value_name = "LEVEL:MESSAGE")]
    emit: Option<String>,

    /// Category names to resolve.
    #[arg(value_name = "CATEGORY", required = true)]
    categories: Vec<String>,
}

/// Runs the client against explicit argument and output streams.
pub fn run_with<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(error) => {
            // clap renders both --help output and usage errors.
            return if error.use_stderr() {
                let _ = write!(stderr, "{error}");
                ExitCode::from(2)
            } else {
                let _ = write!(stdout, "{error}");
                ExitCode::SUCCESS
            };
        }
    };

    let emit = match args.emit.as_deref().map(parse_emit) {
        Some(Ok(parsed)) => Some(parsed),
        Some(Err(message)) => {
            let _ = writeln!(stderr, "taglog: {message}");
            return ExitCode::from(2);
        }
        None => None,
    };

    let reporter = StderrReporter;
    let config = match &args.config {
        Some(path) => LevelConfig::load_path(path, &reporter),
        None => LevelConfig::default(),
    };

    let mut registry = LoggerRegistry::new(Arc::new(config));
    if !args.no_abbrev {
        registry = registry.with_tag_limit(args.tag_limit);
    }

    for name in &args.categories {
        let logger = registry.get_logger(name);
        if print_resolution(stdout, name, &logger).is_err() {
            return ExitCode::FAILURE;
        }
        if let Some((severity, message)) = &emit {
            let mut sink = WriterSink::new(&mut *stdout);
            if send(&mut sink, &logger, *severity, message).is_err() {
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Splits a `LEVEL:MESSAGE` argument into its parts.
fn parse_emit(text: &str) -> Result<(Severity, String), String> {
    let (label, message) = text
        .split_once(':')
        .ok_or_else(|| format!("invalid --emit value `{text}`, expected LEVEL:MESSAGE"))?;
    let severity = label
        .parse::<Severity>()
        .map_err(|error| error.to_string())?;
    Ok((severity, message.to_owned()))
}

fn print_resolution<W: Write>(stdout: &mut W, name: &str, logger: &Logger) -> std::io::Result<()> {
    let enabled: Vec<&str> = Severity::ALL
        .into_iter()
        .filter(|severity| logger.is_enabled(*severity))
        .map(Severity::label)
        .collect();
    let enabled = if enabled.is_empty() {
        "none".to_owned()
    } else {
        enabled.join(",")
    };

    writeln!(stdout, "{name}")?;
    writeln!(stdout, "  tag: {}", logger.effective_name())?;
    writeln!(stdout, "  threshold: {}", logger.threshold())?;
    writeln!(stdout, "  enabled: {enabled}")
}
