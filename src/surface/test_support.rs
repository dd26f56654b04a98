use std::time::Instant;

use crate::error::UiError;
use crate::fade::AlphaAnimation;
use crate::merge::{RenderedWindow, Span};

use super::DisplaySurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SurfaceCall {
    Content(String),
    OverallAlpha(u8),
    AnimateOverall { from: u8, to: u8 },
    AnimateSpan { span: Span, from: u8, to: u8 },
    Present,
}

/// Records every call in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) width: usize,
    pub(crate) calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub(crate) const fn with_width(width: usize) -> Self {
        Self {
            width,
            calls: Vec::new(),
        }
    }

    pub(crate) fn contents(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Content(text) => Some(text.as_str()),
                SurfaceCall::OverallAlpha(_)
                | SurfaceCall::AnimateOverall { .. }
                | SurfaceCall::AnimateSpan { .. }
                | SurfaceCall::Present => None,
            })
            .collect()
    }

    pub(crate) fn count(&self, wanted: &SurfaceCall) -> usize {
        self.calls.iter().filter(|call| *call == wanted).count()
    }
}

impl DisplaySurface for RecordingSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn set_content(&mut self, window: &RenderedWindow) {
        self.calls.push(SurfaceCall::Content(window.text().to_owned()));
    }

    fn set_overall_alpha(&mut self, alpha: u8) {
        self.calls.push(SurfaceCall::OverallAlpha(alpha));
    }

    fn animate_overall_alpha(&mut self, animation: AlphaAnimation) {
        self.calls.push(SurfaceCall::AnimateOverall {
            from: animation.from_alpha(),
            to: animation.to_alpha(),
        });
    }

    fn animate_span_alpha(&mut self, span: &Span, animation: AlphaAnimation) {
        self.calls.push(SurfaceCall::AnimateSpan {
            span: span.clone(),
            from: animation.from_alpha(),
            to: animation.to_alpha(),
        });
    }

    fn present(&mut self, _now: Instant) -> Result<(), UiError> {
        self.calls.push(SurfaceCall::Present);
        Ok(())
    }
}
