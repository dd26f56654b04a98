use tracing::info;

use crate::buffer::Revision;

/// Datagram outcomes counted by the receive task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub received: u64,
    pub decode_failures: u64,
    pub malformed: u64,
    pub inserted: u64,
    pub replaced: u64,
    pub stale: u64,
}

impl IngestStats {
    pub const fn record_received(&mut self) {
        self.received = self.received.saturating_add(1);
    }

    pub const fn record_decode_failure(&mut self) {
        self.decode_failures = self.decode_failures.saturating_add(1);
    }

    pub const fn record_malformed(&mut self) {
        self.malformed = self.malformed.saturating_add(1);
    }

    pub const fn record_revision(&mut self, revision: Revision) {
        match revision {
            Revision::Inserted => self.inserted = self.inserted.saturating_add(1),
            Revision::Replaced => self.replaced = self.replaced.saturating_add(1),
            Revision::Stale => self.stale = self.stale.saturating_add(1),
        }
    }

    /// Fragments that made it into the buffer.
    #[must_use]
    pub const fn accepted(&self) -> u64 {
        self.inserted.saturating_add(self.replaced)
    }

    pub fn log_summary(&self) {
        info!(
            received = self.received,
            inserted = self.inserted,
            replaced = self.replaced,
            stale = self.stale,
            malformed = self.malformed,
            decode_failures = self.decode_failures,
            "Ingest summary"
        );
    }
}
