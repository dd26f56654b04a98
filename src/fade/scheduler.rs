use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::error::UiError;
use crate::merge::Span;
use crate::surface::DisplaySurface;

use super::AlphaAnimation;

pub const OPAQUE: u8 = 255;
pub const TRANSPARENT: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTimings {
    pub fade_in: Duration,
    pub hide_after: Duration,
    pub fade_out: Duration,
    pub frame_interval: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanPhase {
    Hidden,
    FadingIn,
    Visible,
}

/// Notable transitions reported by [`FadeScheduler::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeEvent {
    FadeOutStarted,
    /// The overlay finished fading out and shows nothing.
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Countdown {
    Idle,
    Active { deadline: Instant },
    Expired { fade: AlphaAnimation },
}

#[derive(Debug, Clone)]
struct SpanFade {
    span: Span,
    animation: AlphaAnimation,
}

/// Owns every fade deadline for the presentation task.
///
/// Nothing runs on its own: the owner sleeps until [`next_deadline`] and then
/// calls [`tick`].
///
/// [`next_deadline`]: FadeScheduler::next_deadline
/// [`tick`]: FadeScheduler::tick
#[derive(Debug)]
pub struct FadeScheduler {
    timings: FadeTimings,
    span_fades: Vec<SpanFade>,
    countdown: Countdown,
    next_frame: Option<Instant>,
}

impl FadeScheduler {
    #[must_use]
    pub const fn new(timings: FadeTimings) -> Self {
        Self {
            timings,
            span_fades: Vec::new(),
            countdown: Countdown::Idle,
            next_frame: None,
        }
    }

    #[must_use]
    pub const fn timings(&self) -> &FadeTimings {
        &self.timings
    }

    /// Cancels any pending countdown or fade-out, makes the overlay opaque and
    /// starts counting down `hide_after` from `now`.
    pub fn restart_fade_out(&mut self, now: Instant, surface: &mut dyn DisplaySurface) {
        if let Countdown::Expired { .. } = self.countdown {
            debug!("Fade-out interrupted by new content");
        }
        surface.set_overall_alpha(OPAQUE);
        let deadline = now.checked_add(self.timings.hide_after).unwrap_or(now);
        self.countdown = Countdown::Active { deadline };
    }

    /// Starts a fresh fade-in for every highlight span of the new window.
    ///
    /// Fades belonging to the previous window are dropped, its offsets no
    /// longer mean anything.
    pub fn fade_in_spans<'window, I>(
        &mut self,
        now: Instant,
        spans: I,
        surface: &mut dyn DisplaySurface,
    ) where
        I: IntoIterator<Item = &'window Span>,
    {
        self.span_fades.clear();
        for span in spans.into_iter().filter(|span| span.is_highlight()) {
            let animation = AlphaAnimation::new(TRANSPARENT, OPAQUE, now, self.timings.fade_in);
            surface.animate_span_alpha(span, animation);
            self.span_fades.push(SpanFade {
                span: span.clone(),
                animation,
            });
        }
        if !self.span_fades.is_empty() {
            self.schedule_frame(now);
        }
    }

    #[must_use]
    pub fn span_phase(&self, span: &Span, now: Instant) -> SpanPhase {
        self.span_fades
            .iter()
            .find(|fade| fade.span == *span)
            .map_or(SpanPhase::Visible, |fade| {
                if fade.animation.is_finished(now) {
                    SpanPhase::Visible
                } else if fade.animation.value_at(now) == TRANSPARENT {
                    SpanPhase::Hidden
                } else {
                    SpanPhase::FadingIn
                }
            })
    }

    /// Current overall alpha as driven by the countdown.
    #[must_use]
    pub fn overall_alpha(&self, now: Instant) -> u8 {
        match self.countdown {
            Countdown::Idle | Countdown::Active { .. } => OPAQUE,
            Countdown::Expired { fade } => fade.value_at(now),
        }
    }

    #[must_use]
    pub const fn is_counting_down(&self) -> bool {
        matches!(self.countdown, Countdown::Active { .. })
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.span_fades.is_empty() || matches!(self.countdown, Countdown::Expired { .. })
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let countdown = match self.countdown {
            Countdown::Idle => None,
            Countdown::Active { deadline } => Some(deadline),
            Countdown::Expired { fade } => Some(fade.end()),
        };
        let frame = self.next_frame.filter(|_| self.is_animating());
        match (countdown, frame) {
            (Some(left), Some(right)) => Some(left.min(right)),
            (left, right) => left.or(right),
        }
    }

    /// Fires everything due at `now` and presents a frame while anything is
    /// still animating.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface fails to present.
    pub fn tick(
        &mut self,
        now: Instant,
        surface: &mut dyn DisplaySurface,
    ) -> Result<Option<FadeEvent>, UiError> {
        let was_animating = self.is_animating();
        self.span_fades.retain(|fade| !fade.animation.is_finished(now));

        let event = match self.countdown {
            Countdown::Active { deadline } if now >= deadline => {
                let fade = AlphaAnimation::new(OPAQUE, TRANSPARENT, now, self.timings.fade_out);
                surface.animate_overall_alpha(fade);
                self.countdown = Countdown::Expired { fade };
                debug!(
                    fade_out_ms = self.timings.fade_out.as_millis(),
                    "Visibility countdown expired"
                );
                Some(FadeEvent::FadeOutStarted)
            }
            Countdown::Expired { fade } if fade.is_finished(now) => {
                surface.set_overall_alpha(TRANSPARENT);
                self.countdown = Countdown::Idle;
                debug!("Fade-out finished");
                Some(FadeEvent::Hidden)
            }
            Countdown::Idle | Countdown::Active { .. } | Countdown::Expired { .. } => None,
        };

        if self.is_animating() {
            self.schedule_frame(now);
        } else {
            self.next_frame = None;
        }
        if was_animating || event.is_some() {
            trace!(?event, "Fade tick");
            surface.present(now)?;
        }
        Ok(event)
    }

    /// Drops every pending deadline and fade.
    pub fn teardown(&mut self) {
        self.span_fades.clear();
        self.countdown = Countdown::Idle;
        self.next_frame = None;
    }

    fn schedule_frame(&mut self, now: Instant) {
        self.next_frame = Some(now.checked_add(self.timings.frame_interval).unwrap_or(now));
    }
}
