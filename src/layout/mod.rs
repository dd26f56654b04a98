//! Line measurement used to fit the window into its line budget.
mod wrap;

pub use wrap::WordWrapLayout;

/// Measures how text wraps into display lines at a given width.
pub trait LayoutEngine {
    fn measure(&self, text: &str, width: usize) -> TextLayout;
}

/// Result of a measurement: the byte offset where each display line begins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLayout {
    line_starts: Vec<usize>,
}

impl TextLayout {
    #[must_use]
    pub const fn from_line_starts(line_starts: Vec<usize>) -> Self {
        Self { line_starts }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    #[must_use]
    pub fn line_start(&self, index: usize) -> Option<usize> {
        self.line_starts.get(index).copied()
    }

    /// Splits `text` (the same text that was measured) into its display lines.
    ///
    /// Each entry is the line's start offset and its content without trailing
    /// whitespace.
    #[must_use]
    pub fn lines<'text>(&self, text: &'text str) -> Vec<(usize, &'text str)> {
        self.line_starts
            .iter()
            .enumerate()
            .map(|(index, &start)| {
                let end = self
                    .line_starts
                    .get(index.saturating_add(1))
                    .copied()
                    .unwrap_or(text.len());
                let line = text.get(start..end).unwrap_or_default().trim_end();
                (start, line)
            })
            .collect()
    }
}
