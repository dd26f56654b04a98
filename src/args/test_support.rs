use clap::Parser;

use crate::error::{AppError, AppResult};

use super::OverlayArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<OverlayArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    OverlayArgs::try_parse_from(args).map_err(AppError::from)
}
