//! UDP ingestion: the receive task, the presentation task and the mailbox
//! between them.
mod presenter;
mod receiver;
mod stats;


use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::UdpSocket;
use tracing::info;

use crate::args::PositiveUsize;
use crate::buffer::SubtitleBuffer;
use crate::error::{AppResult, IngestError};
use crate::fade::FadeTimings;
use crate::merge::MergeEngine;
use crate::shutdown::ShutdownSender;
use crate::surface::DisplaySurface;

pub use presenter::Presenter;
pub use receiver::{
    Ingestor, RECV_BUFFER_SIZE, RECV_ERROR_BACKOFF, SnapshotReceiver, SnapshotSender, snapshot_channel,
    spawn_receiver,
};
pub use stats::IngestStats;

/// Everything the overlay pipeline needs once arguments are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSettings {
    pub bind: SocketAddr,
    pub capacity: PositiveUsize,
    pub tail: PositiveUsize,
    pub max_lines: PositiveUsize,
    pub timings: FadeTimings,
}

/// A bound ingestion socket, ready to run the overlay pipeline.
#[derive(Debug)]
pub struct IngestServer {
    socket: UdpSocket,
    settings: IngestSettings,
}

impl IngestServer {
    /// Binds the UDP socket named in `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error when the address cannot be bound.
    pub async fn bind(settings: IngestSettings) -> Result<Self, IngestError> {
        let socket = UdpSocket::bind(settings.bind)
            .await
            .map_err(|source| IngestError::Bind {
                addr: settings.bind,
                source,
            })?;
        Ok(Self { socket, settings })
    }

    /// Address actually bound, useful when binding port 0.
    ///
    /// # Errors
    ///
    /// Returns an error when the socket cannot report its address.
    pub fn local_addr(&self) -> Result<SocketAddr, IngestError> {
        self.socket
            .local_addr()
            .map_err(|source| IngestError::Bind {
                addr: self.settings.bind,
                source,
            })
    }

    /// Runs receive and presentation until shutdown, then logs and returns
    /// the ingest counters.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface fails or the receive task panics.
    pub async fn run<S: DisplaySurface>(
        self,
        surface: S,
        shutdown_tx: &ShutdownSender,
    ) -> AppResult<IngestStats> {
        if let Ok(addr) = self.socket.local_addr() {
            info!(%addr, "Listening for subtitle fragments");
        }

        let buffer = Arc::new(SubtitleBuffer::new(self.settings.capacity));
        let (snapshot_tx, snapshot_rx) = snapshot_channel();
        let shutdown_rx = shutdown_tx.subscribe();
        let ingestor = Ingestor::new(Arc::clone(&buffer), self.settings.tail.get(), snapshot_tx);
        let receiver = spawn_receiver(self.socket, ingestor, shutdown_tx);

        let mut presenter = Presenter::new(
            surface,
            MergeEngine::new(self.settings.max_lines),
            self.settings.timings,
            buffer,
            self.settings.tail.get(),
        );
        let presented = presenter.run(snapshot_rx, shutdown_rx).await;
        drop(shutdown_tx.send(()));

        let stats = receiver.await?;
        stats.log_summary();
        presented?;
        Ok(stats)
    }
}
