use std::path::{Path, PathBuf};

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::OverlayArgs;
use crate::error::{AppError, AppResult};

pub(super) fn parse_with_matches<const N: usize>(
    argv: [&str; N],
) -> AppResult<(OverlayArgs, ArgMatches)> {
    let matches = OverlayArgs::command().try_get_matches_from(argv)?;
    let args = OverlayArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

pub(super) fn write_config(dir: &Path, name: &str, content: &str) -> AppResult<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, content).map_err(AppError::from)?;
    Ok(path)
}
