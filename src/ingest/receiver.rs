use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::sync::watch;
use tracing::{debug, trace, warn};

use crate::buffer::{Revision, SubtitleBuffer};
use crate::error::IngestError;
use crate::fragment::{Fragment, parse_fragment};
use crate::shutdown::ShutdownSender;

use super::IngestStats;

/// Largest datagram read in one receive; longer payloads arrive truncated.
pub const RECV_BUFFER_SIZE: usize = 8192;

/// Pause after a failed receive before the socket is polled again.
pub const RECV_ERROR_BACKOFF: Duration = Duration::from_millis(50);

pub type SnapshotSender = watch::Sender<Vec<Fragment>>;
pub type SnapshotReceiver = watch::Receiver<Vec<Fragment>>;

/// Single-slot mailbox holding the latest buffer tail.
#[must_use]
pub fn snapshot_channel() -> (SnapshotSender, SnapshotReceiver) {
    watch::channel(Vec::new())
}

/// Turns datagrams into buffer updates and tail snapshots.
#[derive(Debug)]
pub struct Ingestor {
    buffer: Arc<SubtitleBuffer>,
    tail: usize,
    snapshot_tx: SnapshotSender,
    stats: IngestStats,
}

impl Ingestor {
    #[must_use]
    pub fn new(buffer: Arc<SubtitleBuffer>, tail: usize, snapshot_tx: SnapshotSender) -> Self {
        Self {
            buffer,
            tail,
            snapshot_tx,
            stats: IngestStats::default(),
        }
    }

    #[must_use]
    pub const fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Handles one payload. Returns the buffer outcome, or `None` when the
    /// payload was dropped before reaching the buffer.
    pub fn handle_datagram(&mut self, payload: &[u8], peer: SocketAddr) -> Option<Revision> {
        self.stats.record_received();

        let raw = match std::str::from_utf8(payload) {
            Ok(raw) => raw,
            Err(source) => {
                self.stats.record_decode_failure();
                debug!("{}", IngestError::Decode { peer, source });
                return None;
            }
        };
        let fragment = match parse_fragment(raw) {
            Ok(fragment) => fragment,
            Err(source) => {
                self.stats.record_malformed();
                debug!("{}", IngestError::Malformed { peer, source });
                return None;
            }
        };

        let id = fragment.id;
        let revision = self.buffer.add_or_update(fragment);
        self.stats.record_revision(revision);
        match revision {
            Revision::Stale => {
                trace!(id, %peer, "Discarded stale revision");
            }
            Revision::Inserted | Revision::Replaced => {
                trace!(id, ?revision, "Buffer updated");
                self.snapshot_tx.send_replace(self.buffer.newest(self.tail));
            }
        }
        Some(revision)
    }
}

/// Spawns the receive loop. It runs until shutdown and yields its counters.
pub fn spawn_receiver(
    socket: UdpSocket,
    mut ingestor: Ingestor,
    shutdown_tx: &ShutdownSender,
) -> tokio::task::JoinHandle<IngestStats> {
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::spawn(async move {
        let mut datagram = vec![0_u8; RECV_BUFFER_SIZE];
        let mut failures: u64 = 0;
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                received = socket.recv_from(&mut datagram) => match received {
                    Ok((len, peer)) => {
                        failures = 0;
                        let payload = datagram.get(..len).unwrap_or_default();
                        ingestor.handle_datagram(payload, peer);
                    }
                    Err(err) => {
                        failures = failures.saturating_add(1);
                        back_off_after_receive_error(&err, failures).await;
                    }
                },
            }
        }
        *ingestor.stats()
    })
}

/// Logs a failed receive and waits [`RECV_ERROR_BACKOFF`]. Only the first
/// failure of a run of consecutive ones is logged at `warn`.
pub(super) async fn back_off_after_receive_error(err: &std::io::Error, consecutive: u64) {
    if consecutive <= 1 {
        warn!("UDP receive failed: {}", err);
    } else {
        debug!(consecutive, "UDP receive still failing: {}", err);
    }
    tokio::time::sleep(RECV_ERROR_BACKOFF).await;
}
