use std::ops::Range;

use crate::fragment::FragmentId;

use super::{FRAGMENT_DELIMITER, Span};

/// The fragment shown last in a window, kept whole so the next update can diff
/// against it even after its head was truncated off screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFragment {
    pub id: FragmentId,
    pub text: String,
}

/// Text currently on screen plus its span layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedWindow {
    text: String,
    spans: Vec<Span>,
    last_rendered: Option<RenderedFragment>,
}

impl RenderedWindow {
    #[must_use]
    pub const fn new(
        text: String,
        spans: Vec<Span>,
        last_rendered: Option<RenderedFragment>,
    ) -> Self {
        Self {
            text,
            spans,
            last_rendered,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn identity_spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(|span| !span.is_highlight())
    }

    pub fn highlight_spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(|span| span.is_highlight())
    }

    #[must_use]
    pub const fn last_rendered(&self) -> Option<&RenderedFragment> {
        self.last_rendered.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn identity_range(&self, fragment_id: FragmentId) -> Option<&Range<usize>> {
        self.identity_spans()
            .find(|span| span.fragment_id() == fragment_id)
            .map(Span::range)
    }
}

/// How much of a fragment's own text is marked for fade-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum HighlightExtent {
    None,
    All,
    /// Everything from this byte offset into the fragment text.
    From(usize),
}

/// Accumulates window text and spans fragment by fragment.
#[derive(Debug, Default)]
pub(super) struct WindowBuilder {
    text: String,
    spans: Vec<Span>,
}

impl WindowBuilder {
    /// Starts from the part of `window` before `end`, keeping only identity spans.
    pub(super) fn carried_prefix(window: &RenderedWindow, end: usize) -> Self {
        let text = window.text().get(..end).unwrap_or_default().to_owned();
        let spans = window
            .identity_spans()
            .filter(|span| span.range().end <= end && span.range().start < end)
            .cloned()
            .collect();
        Self { text, spans }
    }

    pub(super) fn push_fragment(
        &mut self,
        fragment_id: FragmentId,
        text: &str,
        highlight: HighlightExtent,
    ) {
        let identity_start = self.text.len();
        if !self.text.is_empty() {
            self.text.push_str(FRAGMENT_DELIMITER);
        }
        let text_start = self.text.len();
        self.text.push_str(text);
        let end = self.text.len();

        self.spans.push(Span::Identity {
            fragment_id,
            range: identity_start..end,
        });

        let highlight_start = match highlight {
            HighlightExtent::None => return,
            HighlightExtent::All => text_start,
            HighlightExtent::From(offset) => text_start.saturating_add(offset),
        };
        if highlight_start < end {
            self.spans.push(Span::Highlight {
                fragment_id,
                range: highlight_start..end,
            });
        }
    }

    pub(super) fn finish(self) -> (String, Vec<Span>) {
        (self.text, self.spans)
    }
}
