//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{Command, OverlayArgs, SendArgs};
pub use types::PositiveUsize;

pub use defaults::DEFAULT_HEADLESS_WIDTH;
