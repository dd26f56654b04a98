use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::buffer::SubtitleBuffer;
use crate::error::UiError;
use crate::fade::{FadeEvent, FadeScheduler, FadeTimings};
use crate::fragment::Fragment;
use crate::layout::WordWrapLayout;
use crate::merge::{MergeEngine, RenderedWindow};
use crate::shutdown::ShutdownReceiver;
use crate::surface::DisplaySurface;

use super::SnapshotReceiver;

/// Owns the surface and everything that decides what it shows.
///
/// Updates are applied strictly one at a time, in the order they are drained
/// from the mailbox.
pub struct Presenter<S: DisplaySurface> {
    surface: S,
    engine: MergeEngine,
    layout: WordWrapLayout,
    scheduler: FadeScheduler,
    previous: Option<RenderedWindow>,
    buffer: Arc<SubtitleBuffer>,
    tail: usize,
    shown: Vec<Fragment>,
    resync_after_hide: bool,
}

impl<S: DisplaySurface> Presenter<S> {
    #[must_use]
    pub const fn new(
        surface: S,
        engine: MergeEngine,
        timings: FadeTimings,
        buffer: Arc<SubtitleBuffer>,
        tail: usize,
    ) -> Self {
        Self {
            surface,
            engine,
            layout: WordWrapLayout,
            scheduler: FadeScheduler::new(timings),
            previous: None,
            buffer,
            tail,
            shown: Vec::new(),
            resync_after_hide: false,
        }
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub const fn previous(&self) -> Option<&RenderedWindow> {
        self.previous.as_ref()
    }

    #[must_use]
    pub const fn scheduler(&self) -> &FadeScheduler {
        &self.scheduler
    }

    /// Renders the next window from a tail snapshot and starts its fades.
    ///
    /// The first snapshot after a hide may have been taken before the hide
    /// cleared the buffer, so the tail is read from the buffer again instead.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface fails to present.
    pub fn apply_snapshot(&mut self, snapshot: &[Fragment], now: Instant) -> Result<(), UiError> {
        let resynced = self
            .resync_after_hide
            .then(|| self.buffer.newest(self.tail));
        let snapshot = resynced.as_deref().unwrap_or(snapshot);
        if snapshot.is_empty() {
            return Ok(());
        }
        self.resync_after_hide = false;

        let window = self.engine.compute(
            snapshot,
            self.previous.as_ref(),
            &self.layout,
            self.surface.width(),
        );
        debug!(
            text = %window.text(),
            spans = window.spans().len(),
            "Window computed"
        );

        self.surface.set_content(&window);
        self.scheduler.restart_fade_out(now, &mut self.surface);
        self.scheduler
            .fade_in_spans(now, window.highlight_spans(), &mut self.surface);
        self.surface.present(now)?;
        self.previous = Some(window);
        snapshot.clone_into(&mut self.shown);
        Ok(())
    }

    /// Fires due fades. Once the overlay is hidden, the fragments it showed and
    /// the previous window are dropped, so the next fragment renders fresh.
    /// Fragments that arrived after the last rendered snapshot stay buffered.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface fails to present.
    pub fn on_deadline(&mut self, now: Instant) -> Result<Option<FadeEvent>, UiError> {
        let event = self.scheduler.tick(now, &mut self.surface)?;
        if event == Some(FadeEvent::Hidden) {
            self.buffer.clear_shown(&self.shown);
            self.shown.clear();
            self.previous = None;
            self.resync_after_hide = true;
            self.surface.set_content(&RenderedWindow::default());
            info!("Overlay hidden after inactivity");
        }
        Ok(event)
    }

    /// Drains the mailbox and fires fade deadlines until shutdown or until the
    /// receive side goes away.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface fails to present.
    pub async fn run(
        &mut self,
        mut snapshot_rx: SnapshotReceiver,
        mut shutdown_rx: ShutdownReceiver,
    ) -> Result<(), UiError> {
        loop {
            let deadline = self.scheduler.next_deadline();
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                changed = snapshot_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = snapshot_rx.borrow_and_update().clone();
                    self.apply_snapshot(&snapshot, Instant::now())?;
                }
                () = sleep_until_deadline(deadline) => {
                    self.on_deadline(Instant::now())?;
                }
            }
        }

        self.scheduler.teardown();
        Ok(())
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        }
        None => std::future::pending::<()>().await,
    }
}
