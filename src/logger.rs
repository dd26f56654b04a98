use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::AppResult;

/// Where log lines go for the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'path> {
    /// Standard error, used when the overlay runs headless.
    Stderr,
    /// Standard error limited to warnings, so the terminal overlay is not scribbled over.
    StderrQuiet,
    /// Append to a file.
    File(&'path str),
}

const fn fallback_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

fn resolve_filter(verbose: bool, quiet: bool) -> EnvFilter {
    let configured = std::env::var("SUBCAST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    build_filter(configured.as_deref(), fallback_directive(verbose, quiet))
}

/// Parses `configured`, using `fallback` when it is absent or invalid.
fn build_filter(configured: Option<&str>, fallback: &str) -> EnvFilter {
    configured
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Installs the global tracing subscriber.
///
/// A second call leaves the first subscriber in place.
///
/// # Errors
///
/// Returns an error when the log file cannot be opened.
pub fn init_logging(verbose: bool, no_color: bool, target: LogTarget<'_>) -> AppResult<()> {
    let builder = FmtSubscriber::builder().with_target(false);
    let result = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let subscriber = builder
                .with_env_filter(resolve_filter(verbose, false))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
        LogTarget::Stderr | LogTarget::StderrQuiet => {
            let subscriber = builder
                .with_env_filter(resolve_filter(verbose, target == LogTarget::StderrQuiet))
                .with_ansi(!no_color)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
    };

    if let Err(err) = result {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
    Ok(())
}
