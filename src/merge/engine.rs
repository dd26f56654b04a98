use tracing::{debug, warn};

use crate::args::PositiveUsize;
use crate::fragment::Fragment;
use crate::layout::LayoutEngine;

use super::window::{HighlightExtent, WindowBuilder};
use super::{RenderedFragment, RenderedWindow, Span};

/// Upper bound on truncation passes when a layout engine keeps reporting
/// overflow for text it already cut.
const MAX_FIT_PASSES: usize = 4;

/// Computes successive windows under a fixed line budget.
#[derive(Debug, Clone, Copy)]
pub struct MergeEngine {
    max_lines: usize,
}

impl MergeEngine {
    #[must_use]
    pub const fn new(max_lines: PositiveUsize) -> Self {
        Self {
            max_lines: max_lines.get(),
        }
    }

    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Builds the next window from the buffer tail.
    ///
    /// When the fragment shown last in `previous` is still among `candidates`,
    /// everything the previous window showed before it is carried over as is
    /// and only that fragment and the ones after it are laid out again.
    /// Otherwise every candidate is rendered fresh and fully highlighted.
    #[must_use]
    pub fn compute(
        &self,
        candidates: &[Fragment],
        previous: Option<&RenderedWindow>,
        layout: &dyn LayoutEngine,
        width: usize,
    ) -> RenderedWindow {
        let Some(last) = candidates.last() else {
            return RenderedWindow::default();
        };

        let anchored = previous.and_then(|window| {
            let rendered = window.last_rendered()?;
            let index = candidates
                .iter()
                .position(|fragment| fragment.id == rendered.id)?;
            Some((window, rendered, index))
        });

        let builder = match anchored {
            Some((window, rendered, index)) => incremental(candidates, window, rendered, index),
            None => fresh(candidates),
        };

        let (text, spans) = builder.finish();
        let (text, spans) = self.fit(text, spans, layout, width);

        RenderedWindow::new(
            text,
            spans,
            Some(RenderedFragment {
                id: last.id,
                text: last.text.clone(),
            }),
        )
    }

    /// Drops whole lines from the top until the text fits `max_lines`.
    fn fit(
        &self,
        mut text: String,
        mut spans: Vec<Span>,
        layout: &dyn LayoutEngine,
        width: usize,
    ) -> (String, Vec<Span>) {
        for pass in 0..MAX_FIT_PASSES {
            let measured = layout.measure(&text, width);
            let line_count = measured.line_count();
            if line_count <= self.max_lines {
                return (text, spans);
            }
            if pass > 0 {
                warn!(
                    line_count,
                    max_lines = self.max_lines,
                    "Layout overflow after truncation; cutting again"
                );
            }

            let lines_to_remove = line_count.saturating_sub(self.max_lines);
            let reported = measured.line_start(lines_to_remove).unwrap_or(text.len());
            let cut = char_boundary_at_or_after(&text, reported);
            if cut == 0 {
                warn!(reported, "Layout reported no progress; keeping overflowing window");
                return (text, spans);
            }

            debug!(lines_to_remove, cut, "Truncating window");
            text = text.get(cut..).unwrap_or_default().to_owned();
            spans = spans.iter().filter_map(|span| span.clipped(cut)).collect();
        }

        (text, spans)
    }
}

fn fresh(candidates: &[Fragment]) -> WindowBuilder {
    let mut builder = WindowBuilder::default();
    for fragment in candidates {
        builder.push_fragment(fragment.id, &fragment.text, HighlightExtent::All);
    }
    builder
}

fn incremental(
    candidates: &[Fragment],
    window: &RenderedWindow,
    rendered: &RenderedFragment,
    anchor_index: usize,
) -> WindowBuilder {
    let prefix_end = window
        .identity_range(rendered.id)
        .map_or(window.text().len(), |range| range.start);
    let mut builder = WindowBuilder::carried_prefix(window, prefix_end);
    let last_index = candidates.len().saturating_sub(1);

    for (index, fragment) in candidates.iter().enumerate().skip(anchor_index) {
        let extent = if index != anchor_index {
            HighlightExtent::All
        } else if index == last_index {
            HighlightExtent::From(common_prefix_len(&rendered.text, &fragment.text))
        } else {
            HighlightExtent::None
        };
        builder.push_fragment(fragment.id, &fragment.text, extent);
    }

    builder
}

/// Byte length of the longest common leading substring, compared by `char`.
fn common_prefix_len(previous: &str, current: &str) -> usize {
    previous
        .char_indices()
        .zip(current.chars())
        .find(|((_, before), after)| before != after)
        .map_or(previous.len().min(current.len()), |((index, _), _)| index)
}

fn char_boundary_at_or_after(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset = offset.saturating_add(1);
    }
    offset
}
