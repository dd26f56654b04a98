//! Where rendered windows end up: the display trait and the headless log surface.
mod log;

#[cfg(test)]
pub(crate) mod test_support;

use std::time::Instant;

use crate::error::UiError;
use crate::fade::AlphaAnimation;
use crate::merge::{RenderedWindow, Span};

pub use log::LogSurface;

/// Receives windows and alpha commands from the presentation task.
///
/// Animations are handed over whole; the surface interpolates them itself when
/// it is asked to `present`.
pub trait DisplaySurface {
    /// Width in display cells used for line measurement.
    fn width(&self) -> usize;

    fn set_content(&mut self, window: &RenderedWindow);

    fn set_overall_alpha(&mut self, alpha: u8);

    fn animate_overall_alpha(&mut self, animation: AlphaAnimation);

    fn animate_span_alpha(&mut self, span: &Span, animation: AlphaAnimation);

    /// Redraws the current content at `now`, including in-flight animations.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing display cannot be drawn to.
    fn present(&mut self, now: Instant) -> Result<(), UiError>;
}
