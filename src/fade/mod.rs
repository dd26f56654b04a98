//! Highlight fade-in state machines and the overlay visibility countdown.
mod animation;
mod scheduler;

#[cfg(test)]
mod tests;

pub use animation::AlphaAnimation;
pub use scheduler::{FadeEvent, FadeScheduler, FadeTimings, OPAQUE, SpanPhase, TRANSPARENT};
