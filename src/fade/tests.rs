use std::time::{Duration, Instant};

use super::*;
use crate::merge::Span;
use crate::surface::test_support::{RecordingSurface, SurfaceCall};

const TIMINGS: FadeTimings = FadeTimings {
    fade_in: Duration::from_millis(250),
    hide_after: Duration::from_secs(5),
    fade_out: Duration::from_millis(500),
    frame_interval: Duration::from_millis(33),
};

fn after(start: Instant, ms: u64) -> Instant {
    start
        .checked_add(Duration::from_millis(ms))
        .unwrap_or(start)
}

fn highlight(id: i64, start: usize, end: usize) -> Span {
    Span::Highlight {
        fragment_id: id,
        range: start..end,
    }
}

#[test]
fn idle_scheduler_has_no_deadline() -> Result<(), String> {
    let scheduler = FadeScheduler::new(TIMINGS);
    if scheduler.next_deadline().is_some() {
        return Err("Idle scheduler reported a deadline".to_owned());
    }
    if scheduler.is_counting_down() || scheduler.is_animating() {
        return Err("Idle scheduler should not be running".to_owned());
    }
    Ok(())
}

#[test]
fn span_walks_hidden_fading_visible() -> Result<(), String> {
    let start = Instant::now();
    let mut surface = RecordingSurface::with_width(40);
    let mut scheduler = FadeScheduler::new(TIMINGS);
    let span = highlight(1, 0, 5);

    scheduler.fade_in_spans(start, [&span], &mut surface);

    let phases = [
        (start, SpanPhase::Hidden),
        (after(start, 100), SpanPhase::FadingIn),
        (after(start, 250), SpanPhase::Visible),
    ];
    for (now, expected) in phases {
        let phase = scheduler.span_phase(&span, now);
        if phase != expected {
            return Err(format!("Expected {:?}, got {:?}", expected, phase));
        }
    }

    let expected_call = SurfaceCall::AnimateSpan {
        span,
        from: TRANSPARENT,
        to: OPAQUE,
    };
    if surface.count(&expected_call) != 1 {
        return Err(format!("Missing span animation in {:?}", surface.calls));
    }
    Ok(())
}

#[test]
fn identity_spans_are_not_faded() -> Result<(), String> {
    let start = Instant::now();
    let mut surface = RecordingSurface::with_width(40);
    let mut scheduler = FadeScheduler::new(TIMINGS);
    let identity = Span::Identity {
        fragment_id: 1,
        range: 0..5,
    };

    scheduler.fade_in_spans(start, [&identity], &mut surface);

    if scheduler.is_animating() || !surface.calls.is_empty() {
        return Err(format!("Identity span was animated: {:?}", surface.calls));
    }
    Ok(())
}

#[test]
fn frames_are_scheduled_while_fading() -> Result<(), String> {
    let start = Instant::now();
    let mut surface = RecordingSurface::with_width(40);
    let mut scheduler = FadeScheduler::new(TIMINGS);
    let span = highlight(1, 0, 5);

    scheduler.restart_fade_out(start, &mut surface);
    scheduler.fade_in_spans(start, [&span], &mut surface);

    if scheduler.next_deadline() != Some(after(start, 33)) {
        return Err(format!(
            "Expected first frame deadline, got {:?}",
            scheduler.next_deadline()
        ));
    }

    let event = scheduler
        .tick(after(start, 33), &mut surface)
        .map_err(|err| err.to_string())?;
    if event.is_some() {
        return Err(format!("Unexpected event: {:?}", event));
    }
    if scheduler.next_deadline() != Some(after(start, 66)) {
        return Err(format!(
            "Expected second frame deadline, got {:?}",
            scheduler.next_deadline()
        ));
    }

    scheduler
        .tick(after(start, 260), &mut surface)
        .map_err(|err| err.to_string())?;
    if scheduler.is_animating() {
        return Err("Fade-in should have finished".to_owned());
    }
    if scheduler.next_deadline() != Some(after(start, 5_000)) {
        return Err(format!(
            "Expected countdown deadline, got {:?}",
            scheduler.next_deadline()
        ));
    }
    if surface.count(&SurfaceCall::Present) != 2 {
        return Err(format!("Expected two frames, got {:?}", surface.calls));
    }
    Ok(())
}

#[test]
fn countdown_expires_then_hides() -> Result<(), String> {
    let start = Instant::now();
    let mut surface = RecordingSurface::with_width(40);
    let mut scheduler = FadeScheduler::new(TIMINGS);

    scheduler.restart_fade_out(start, &mut surface);
    let early = scheduler
        .tick(after(start, 4_999), &mut surface)
        .map_err(|err| err.to_string())?;
    if early.is_some() {
        return Err(format!("Countdown fired early: {:?}", early));
    }

    let expired = scheduler
        .tick(after(start, 5_000), &mut surface)
        .map_err(|err| err.to_string())?;
    if expired != Some(FadeEvent::FadeOutStarted) {
        return Err(format!("Expected fade-out start, got {:?}", expired));
    }
    let midway = scheduler.overall_alpha(after(start, 5_250));
    if midway == OPAQUE || midway == TRANSPARENT {
        return Err(format!("Expected partial alpha, got {}", midway));
    }

    let hidden = scheduler
        .tick(after(start, 5_500), &mut surface)
        .map_err(|err| err.to_string())?;
    if hidden != Some(FadeEvent::Hidden) {
        return Err(format!("Expected hidden, got {:?}", hidden));
    }
    if scheduler.next_deadline().is_some() {
        return Err("Scheduler should be idle after hiding".to_owned());
    }

    let expected = [
        SurfaceCall::OverallAlpha(OPAQUE),
        SurfaceCall::AnimateOverall {
            from: OPAQUE,
            to: TRANSPARENT,
        },
        SurfaceCall::Present,
        SurfaceCall::OverallAlpha(TRANSPARENT),
        SurfaceCall::Present,
    ];
    if surface.calls != expected {
        return Err(format!("Unexpected surface calls: {:?}", surface.calls));
    }
    Ok(())
}

#[test]
fn new_content_restarts_countdown_and_restores_alpha() -> Result<(), String> {
    let start = Instant::now();
    let mut surface = RecordingSurface::with_width(40);
    let mut scheduler = FadeScheduler::new(TIMINGS);

    scheduler.restart_fade_out(start, &mut surface);
    scheduler.restart_fade_out(after(start, 3_000), &mut surface);
    if scheduler.next_deadline() != Some(after(start, 8_000)) {
        return Err(format!(
            "Countdown was not restarted: {:?}",
            scheduler.next_deadline()
        ));
    }

    scheduler
        .tick(after(start, 8_000), &mut surface)
        .map_err(|err| err.to_string())?;
    scheduler.restart_fade_out(after(start, 8_100), &mut surface);
    if scheduler.overall_alpha(after(start, 8_100)) != OPAQUE {
        return Err("Fade-out was not cancelled".to_owned());
    }
    let event = scheduler
        .tick(after(start, 8_600), &mut surface)
        .map_err(|err| err.to_string())?;
    if event.is_some() {
        return Err(format!("Cancelled fade-out still fired: {:?}", event));
    }
    if surface.count(&SurfaceCall::OverallAlpha(OPAQUE)) != 3 {
        return Err(format!("Unexpected surface calls: {:?}", surface.calls));
    }
    Ok(())
}

#[test]
fn rehighlighting_restarts_fade() -> Result<(), String> {
    let start = Instant::now();
    let mut surface = RecordingSurface::with_width(40);
    let mut scheduler = FadeScheduler::new(TIMINGS);
    let first = highlight(1, 0, 5);
    let second = highlight(2, 6, 9);

    scheduler.fade_in_spans(start, [&first], &mut surface);
    scheduler.fade_in_spans(after(start, 200), [&first, &second], &mut surface);

    let phase = scheduler.span_phase(&first, after(start, 260));
    if phase != SpanPhase::FadingIn {
        return Err(format!("Re-highlighted span should still fade, got {:?}", phase));
    }
    Ok(())
}

#[test]
fn teardown_drops_everything() -> Result<(), String> {
    let start = Instant::now();
    let mut surface = RecordingSurface::with_width(40);
    let mut scheduler = FadeScheduler::new(TIMINGS);
    let span = highlight(1, 0, 5);

    scheduler.restart_fade_out(start, &mut surface);
    scheduler.fade_in_spans(start, [&span], &mut surface);
    scheduler.teardown();

    if scheduler.next_deadline().is_some() || scheduler.is_animating() {
        return Err("Teardown left pending work".to_owned());
    }
    Ok(())
}
