use std::ops::Range;

use crate::fragment::FragmentId;

/// Styled range over the window text, in byte offsets on char boundaries.
///
/// Identity spans partition the text by owning fragment. Highlight spans are an
/// independent layer marking text that should fade in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Span {
    Identity {
        fragment_id: FragmentId,
        range: Range<usize>,
    },
    Highlight {
        fragment_id: FragmentId,
        range: Range<usize>,
    },
}

impl Span {
    #[must_use]
    pub const fn fragment_id(&self) -> FragmentId {
        match self {
            Self::Identity { fragment_id, .. } | Self::Highlight { fragment_id, .. } => {
                *fragment_id
            }
        }
    }

    #[must_use]
    pub const fn range(&self) -> &Range<usize> {
        match self {
            Self::Identity { range, .. } | Self::Highlight { range, .. } => range,
        }
    }

    #[must_use]
    pub const fn is_highlight(&self) -> bool {
        matches!(self, Self::Highlight { .. })
    }

    /// Re-bases the span onto text that had its first `cut` bytes removed.
    ///
    /// Spans ending at or before the cut are dropped; a straddling span keeps
    /// only its surviving tail.
    #[must_use]
    pub fn clipped(&self, cut: usize) -> Option<Self> {
        let range = self.range();
        if range.end <= cut {
            return None;
        }
        let clipped = range.start.max(cut).saturating_sub(cut)..range.end.saturating_sub(cut);
        Some(self.with_range(clipped))
    }

    fn with_range(&self, range: Range<usize>) -> Self {
        match self {
            Self::Identity { fragment_id, .. } => Self::Identity {
                fragment_id: *fragment_id,
                range,
            },
            Self::Highlight { fragment_id, .. } => Self::Highlight {
                fragment_id: *fragment_id,
                range,
            },
        }
    }
}
