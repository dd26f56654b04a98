use std::time::Instant;

use tracing::{debug, info, trace};

use crate::error::UiError;
use crate::fade::AlphaAnimation;
use crate::merge::{RenderedWindow, Span};

use super::DisplaySurface;

/// Headless surface that reports windows and fade events through `tracing`.
#[derive(Debug, Clone)]
pub struct LogSurface {
    width: usize,
}

impl LogSurface {
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }
}

impl DisplaySurface for LogSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn set_content(&mut self, window: &RenderedWindow) {
        if window.is_empty() {
            debug!("Window cleared");
            return;
        }
        let highlighted: Vec<&str> = window
            .highlight_spans()
            .filter_map(|span| window.text().get(span.range().clone()))
            .collect();
        info!(text = %window.text(), ?highlighted, "Window updated");
    }

    fn set_overall_alpha(&mut self, alpha: u8) {
        match alpha {
            0 => info!("Overlay hidden"),
            255 => debug!("Overlay fully visible"),
            _ => debug!(alpha, "Overlay alpha set"),
        }
    }

    fn animate_overall_alpha(&mut self, animation: AlphaAnimation) {
        info!(
            from = animation.from_alpha(),
            to = animation.to_alpha(),
            duration_ms = animation.duration().as_millis(),
            "Overlay fading"
        );
    }

    fn animate_span_alpha(&mut self, span: &Span, animation: AlphaAnimation) {
        debug!(
            fragment_id = span.fragment_id(),
            range = ?span.range(),
            duration_ms = animation.duration().as_millis(),
            "Span fading in"
        );
    }

    fn present(&mut self, _now: Instant) -> Result<(), UiError> {
        trace!("Frame presented");
        Ok(())
    }
}
