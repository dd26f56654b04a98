//! Bounded, de-duplicating store of the most recent fragments.
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::args::PositiveUsize;
use crate::fragment::{Fragment, FragmentId};


/// Outcome of [`SubtitleBuffer::add_or_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    Inserted,
    Replaced,
    /// An older (or equal-id, earlier-ending) revision arrived late and was discarded.
    Stale,
}

#[derive(Debug, Default)]
struct Entries {
    by_id: HashMap<FragmentId, Fragment>,
    order: VecDeque<FragmentId>,
}

/// Ordered fragment buffer shared between the receive and presentation tasks.
///
/// New ids append to the back, revisions replace in place, and overflow evicts
/// from the front. All operations take the same lock and do no I/O under it.
#[derive(Debug)]
pub struct SubtitleBuffer {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl SubtitleBuffer {
    #[must_use]
    pub fn new(capacity: PositiveUsize) -> Self {
        Self {
            capacity: capacity.get(),
            entries: Mutex::new(Entries::default()),
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn add_or_update(&self, fragment: Fragment) -> Revision {
        let mut guard = self.lock();
        let entries = &mut *guard;
        let revision = match entries.by_id.get_mut(&fragment.id) {
            Some(existing) if fragment.end_ms >= existing.end_ms => {
                *existing = fragment;
                Revision::Replaced
            }
            Some(_) => Revision::Stale,
            None => {
                entries.order.push_back(fragment.id);
                entries.by_id.insert(fragment.id, fragment);
                Revision::Inserted
            }
        };

        while entries.order.len() > self.capacity {
            if let Some(evicted) = entries.order.pop_front() {
                entries.by_id.remove(&evicted);
            }
        }

        revision
    }

    /// Returns up to `count` of the most recently inserted positions, oldest first.
    #[must_use]
    pub fn newest(&self, count: usize) -> Vec<Fragment> {
        let entries = self.lock();
        let skip = entries.order.len().saturating_sub(count);
        entries
            .order
            .iter()
            .skip(skip)
            .filter_map(|id| entries.by_id.get(id).cloned())
            .collect()
    }

    /// Drops what a hidden window showed, keeping anything that arrived since.
    ///
    /// Entries at or before the position of the last fragment in `shown` go,
    /// unless their stored revision differs from the one in `shown`. Entries
    /// positioned after it are newer and stay.
    pub fn clear_shown(&self, shown: &[Fragment]) {
        let Some(last) = shown.last() else {
            return;
        };
        let mut guard = self.lock();
        let entries = &mut *guard;
        let boundary = entries.order.iter().position(|id| *id == last.id);

        let mut kept = VecDeque::with_capacity(entries.order.len());
        for (index, id) in entries.order.iter().enumerate() {
            let newer_position = boundary.is_none_or(|boundary| index > boundary);
            let revised = shown
                .iter()
                .find(|fragment| fragment.id == *id)
                .is_some_and(|fragment| entries.by_id.get(id) != Some(fragment));
            if newer_position || revised {
                kept.push_back(*id);
            } else {
                entries.by_id.remove(id);
            }
        }
        entries.order = kept;
    }

    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.by_id.clear();
        entries.order.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // Poisoning is recovered; `newest` tolerates ids missing from the map.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
