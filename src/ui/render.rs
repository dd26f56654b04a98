mod frame;
mod lifecycle;
mod theme;

use std::time::Instant;

use ratatui::{Terminal, layout::Rect, prelude::Backend};

use crate::error::UiError;
use crate::fade::AlphaAnimation;
use crate::merge::{RenderedWindow, Span};
use crate::surface::DisplaySurface;

use super::model::OverlayModel;

pub(crate) use frame::overlay_lines;
pub use lifecycle::{TerminalGuard, Ui, UiActions};

/// Subtitle overlay drawn with ratatui, bottom-aligned and centered.
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    model: OverlayModel,
    width_override: Option<usize>,
    no_color: bool,
}

impl<B: Backend> TerminalSurface<B> {
    #[must_use]
    pub fn new(terminal: Terminal<B>, width_override: Option<usize>, no_color: bool) -> Self {
        Self {
            terminal,
            model: OverlayModel::new(Instant::now()),
            width_override,
            no_color,
        }
    }

    #[must_use]
    pub const fn model(&self) -> &OverlayModel {
        &self.model
    }

    #[must_use]
    pub const fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> DisplaySurface for TerminalSurface<B> {
    fn width(&self) -> usize {
        let area = self
            .terminal
            .size()
            .unwrap_or_else(|_| Rect::new(0, 0, theme::DEFAULT_TERMINAL_WIDTH, 1));
        let available = usize::from(frame::inset(area).width).max(1);
        self.width_override
            .map_or(available, |width| width.min(available))
    }

    fn set_content(&mut self, window: &RenderedWindow) {
        self.model.set_content(window);
    }

    fn set_overall_alpha(&mut self, alpha: u8) {
        self.model.set_overall(alpha, Instant::now());
    }

    fn animate_overall_alpha(&mut self, animation: AlphaAnimation) {
        self.model.animate_overall(animation);
    }

    fn animate_span_alpha(&mut self, span: &Span, animation: AlphaAnimation) {
        self.model.animate_span(span, animation);
    }

    fn present(&mut self, now: Instant) -> Result<(), UiError> {
        let wrap_width = self.width();
        let model = &self.model;
        let no_color = self.no_color;
        self.terminal
            .draw(|f| frame::draw_frame(f, model, wrap_width, now, no_color))
            .map(|_| ())
            .map_err(|source| UiError::Draw { source })
    }
}
