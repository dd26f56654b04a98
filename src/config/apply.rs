use std::net::SocketAddr;
use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{OverlayArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments.
///
/// Options given on the command line (or via their environment variable) are left untouched.
///
/// # Errors
///
/// Returns an error when a config value is out of range or cannot be parsed.
pub fn apply_config(
    args: &mut OverlayArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "bind")
        && let Some(bind) = config.bind.as_deref()
    {
        args.bind = parse_bind(bind)?;
    }

    if !is_explicit(matches, "capacity")
        && let Some(capacity) = config.capacity
    {
        args.capacity = ensure_positive(capacity, "capacity")?;
    }

    if !is_explicit(matches, "max_lines")
        && let Some(max_lines) = config.max_lines
    {
        args.max_lines = ensure_positive(max_lines, "max_lines")?;
    }

    if !is_explicit(matches, "tail")
        && let Some(tail) = config.tail
    {
        args.tail = ensure_positive(tail, "tail")?;
    }

    if !is_explicit(matches, "width")
        && let Some(width) = config.width
    {
        args.width = Some(ensure_positive(width, "width")?);
    }

    if !is_explicit(matches, "fade_in")
        && let Some(value) = config.fade_in.as_ref()
    {
        args.fade_in = to_duration(value, "fade_in")?;
    }

    if !is_explicit(matches, "hide_after")
        && let Some(value) = config.hide_after.as_ref()
    {
        args.hide_after = to_duration(value, "hide_after")?;
    }

    if !is_explicit(matches, "fade_out")
        && let Some(value) = config.fade_out.as_ref()
    {
        args.fade_out = to_duration(value, "fade_out")?;
    }

    if !is_explicit(matches, "frame_interval")
        && let Some(value) = config.frame_interval.as_ref()
    {
        args.frame_interval = to_duration(value, "frame_interval")?;
    }

    if !is_explicit(matches, "no_ui")
        && let Some(no_ui) = config.no_ui
    {
        args.no_ui = no_ui;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_explicit(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_explicit(matches, "log_file")
        && let Some(path) = config.log_file.clone()
    {
        args.log_file = Some(path);
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn parse_bind(value: &str) -> AppResult<SocketAddr> {
    value.trim().parse().map_err(|err| {
        AppError::config(ConfigError::InvalidBind {
            value: value.to_owned(),
            source: err,
        })
    })
}

fn ensure_positive(value: u64, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn to_duration(value: &DurationValue, field: &'static str) -> AppResult<Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}
