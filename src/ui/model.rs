use std::time::Instant;

use crate::fade::{AlphaAnimation, OPAQUE};
use crate::merge::{RenderedWindow, Span};

/// What the terminal overlay shows: the current window and the alpha ramps
/// applied to it.
#[derive(Debug, Clone)]
pub struct OverlayModel {
    window: RenderedWindow,
    overall: AlphaAnimation,
    span_fades: Vec<(Span, AlphaAnimation)>,
}

impl OverlayModel {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            window: RenderedWindow::default(),
            overall: AlphaAnimation::steady(OPAQUE, now),
            span_fades: Vec::new(),
        }
    }

    #[must_use]
    pub const fn window(&self) -> &RenderedWindow {
        &self.window
    }

    /// Replaces the window. Span ramps of the old window are discarded.
    pub fn set_content(&mut self, window: &RenderedWindow) {
        self.window = window.clone();
        self.span_fades.clear();
    }

    pub fn set_overall(&mut self, alpha: u8, now: Instant) {
        self.overall = AlphaAnimation::steady(alpha, now);
    }

    pub const fn animate_overall(&mut self, animation: AlphaAnimation) {
        self.overall = animation;
    }

    pub fn animate_span(&mut self, span: &Span, animation: AlphaAnimation) {
        self.span_fades.retain(|(existing, _)| existing != span);
        self.span_fades.push((span.clone(), animation));
    }

    #[must_use]
    pub fn overall_alpha(&self, now: Instant) -> u8 {
        self.overall.value_at(now)
    }

    /// Effective alpha of the byte at `offset`: the overall alpha scaled by the
    /// faintest span ramp covering it.
    #[must_use]
    pub fn alpha_at(&self, offset: usize, now: Instant) -> u8 {
        let span_alpha = self
            .span_fades
            .iter()
            .filter(|(span, _)| span.range().contains(&offset))
            .map(|(_, animation)| animation.value_at(now))
            .min()
            .unwrap_or(OPAQUE);
        scale_alpha(self.overall_alpha(now), span_alpha)
    }
}

fn scale_alpha(left: u8, right: u8) -> u8 {
    let product = u16::from(left)
        .checked_mul(u16::from(right))
        .and_then(|value| value.checked_div(u16::from(OPAQUE)))
        .unwrap_or(0);
    u8::try_from(product).unwrap_or(OPAQUE)
}
