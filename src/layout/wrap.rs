use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{LayoutEngine, TextLayout};

/// Greedy word wrap over terminal cells.
///
/// Hard newlines always break. Whitespace at a wrap point hangs off the end of
/// the previous line, so every wrapped line starts at a visible character.
/// Words wider than the whole line are broken between chars.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordWrapLayout;

impl LayoutEngine for WordWrapLayout {
    fn measure(&self, text: &str, width: usize) -> TextLayout {
        if text.is_empty() {
            return TextLayout::default();
        }
        let width = width.max(1);
        let mut line_starts = Vec::new();
        let mut paragraph_start = 0_usize;

        for paragraph in text.split('\n') {
            line_starts.push(paragraph_start);
            wrap_paragraph(paragraph, paragraph_start, width, &mut line_starts);
            paragraph_start = paragraph_start
                .saturating_add(paragraph.len())
                .saturating_add(1);
        }

        TextLayout::from_line_starts(line_starts)
    }
}

fn wrap_paragraph(paragraph: &str, base: usize, width: usize, line_starts: &mut Vec<usize>) {
    let mut line_width = 0_usize;
    let mut pending_space = 0_usize;

    for (offset, run) in runs(paragraph) {
        let run_width = run.width();
        if run.starts_with(char::is_whitespace) {
            if offset == 0 {
                line_width = run_width;
            } else {
                pending_space = run_width;
            }
            continue;
        }

        let fits = line_width
            .saturating_add(pending_space)
            .saturating_add(run_width)
            <= width;
        if line_width > 0 && !fits {
            line_starts.push(base.saturating_add(offset));
            line_width = 0;
        } else {
            line_width = line_width.saturating_add(pending_space);
        }
        pending_space = 0;

        if line_width.saturating_add(run_width) <= width {
            line_width = line_width.saturating_add(run_width);
            continue;
        }

        for (index, ch) in run.char_indices() {
            let char_width = ch.width().unwrap_or(0);
            if line_width > 0 && line_width.saturating_add(char_width) > width {
                line_starts.push(base.saturating_add(offset).saturating_add(index));
                line_width = 0;
            }
            line_width = line_width.saturating_add(char_width);
        }
    }
}

/// Splits text into maximal runs of whitespace and non-whitespace.
fn runs(text: &str) -> Vec<(usize, &str)> {
    let mut runs = Vec::new();
    let mut start = 0_usize;
    let mut in_space: Option<bool> = None;

    for (index, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        if in_space.is_some_and(|current| current != is_space) {
            runs.push((start, text.get(start..index).unwrap_or_default()));
            start = index;
        }
        in_space = Some(is_space);
    }
    if start < text.len() {
        runs.push((start, text.get(start..).unwrap_or_default()));
    }

    runs
}
