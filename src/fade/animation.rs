use std::time::{Duration, Instant};

/// Linear alpha ramp between two levels, anchored at a start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaAnimation {
    from: u8,
    to: u8,
    start: Instant,
    duration: Duration,
}

impl AlphaAnimation {
    #[must_use]
    pub const fn new(from: u8, to: u8, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// A ramp that already sits at `alpha`.
    #[must_use]
    pub const fn steady(alpha: u8, now: Instant) -> Self {
        Self::new(alpha, alpha, now, Duration::ZERO)
    }

    #[must_use]
    pub const fn from_alpha(&self) -> u8 {
        self.from
    }

    #[must_use]
    pub const fn to_alpha(&self) -> u8 {
        self.to
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn end(&self) -> Instant {
        self.start.checked_add(self.duration).unwrap_or(self.start)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.end()
    }

    /// Alpha at `now`, clamped to the ramp's endpoints.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> u8 {
        let elapsed = now.saturating_duration_since(self.start).as_micros();
        let total = self.duration.as_micros();
        if total == 0 || elapsed >= total {
            return self.to;
        }

        let from = i128::from(self.from);
        let to = i128::from(self.to);
        let value = to
            .checked_sub(from)
            .and_then(|delta| delta.checked_mul(i128::try_from(elapsed).ok()?))
            .and_then(|scaled| scaled.checked_div(i128::try_from(total).ok()?))
            .and_then(|step| from.checked_add(step))
            .unwrap_or(to);
        u8::try_from(value.clamp(0, 255)).unwrap_or(self.to)
    }
}
