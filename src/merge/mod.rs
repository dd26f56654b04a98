//! Incremental window merge: turns the buffer tail and the previous window into
//! the next line-budgeted window with fade-in highlights.
mod engine;
mod span;
mod window;


pub use engine::MergeEngine;
pub use span::Span;
pub use window::{RenderedFragment, RenderedWindow};

/// Separator placed between consecutive fragments in the window text.
pub const FRAGMENT_DELIMITER: &str = " ";
