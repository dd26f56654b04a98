use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::parsers::parse_duration_arg;
use crate::args::{OverlayArgs, PositiveUsize};
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::error::{AppError, AppResult};
use crate::fragment::{Fragment, parse_fragment, parse_timestamp, split_blocks};
use crate::layout::WordWrapLayout;
use crate::merge::{MergeEngine, RenderedWindow};

thread_local! {
    static BASE_MATCHES: ArgMatches = OverlayArgs::command().get_matches_from(["subcast"]);
}

/// Parses one datagram payload into a fragment.
///
/// # Errors
///
/// Returns an error when the payload is not a valid fragment block.
pub fn parse_fragment_input(input: &str) -> AppResult<Fragment> {
    parse_fragment(input).map_err(AppError::from)
}

#[must_use]
pub fn parse_timestamp_input(input: &str) -> u64 {
    parse_timestamp(input)
}

#[must_use]
pub fn split_blocks_input(input: &str) -> Vec<String> {
    split_blocks(input)
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input)
}

/// Parses TOML config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<OverlayArgs> {
    let config: ConfigFile = toml::from_str(input)?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<OverlayArgs> {
    let config: ConfigFile = serde_json::from_slice(input)?;
    apply_config_to_defaults(&config)
}

/// Merges a sequence of snapshots the way the presenter does and returns every window.
///
/// # Errors
///
/// Returns an error when `max_lines` is zero.
pub fn merge_snapshots_input(
    snapshots: &[Vec<Fragment>],
    max_lines: usize,
    width: usize,
) -> AppResult<Vec<RenderedWindow>> {
    let engine = MergeEngine::new(PositiveUsize::try_from(max_lines)?);
    let mut windows: Vec<RenderedWindow> = Vec::with_capacity(snapshots.len());
    for snapshot in snapshots {
        let window = engine.compute(snapshot, windows.last(), &WordWrapLayout, width);
        windows.push(window);
    }
    Ok(windows)
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<OverlayArgs> {
    BASE_MATCHES.with(|matches| {
        let mut args = OverlayArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)?;
        Ok(args)
    })
}
