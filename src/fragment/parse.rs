use crate::error::FragmentError;

use super::{Fragment, TIME_RANGE_SEPARATOR, parse_timestamp};

const MIN_FRAGMENT_LINES: usize = 3;

/// Parses one datagram block into a [`Fragment`].
///
/// The block is `<id>`, `<start> --> <end>`, then one or more text lines.
///
/// # Errors
///
/// Returns [`FragmentError`] when the block has fewer than three lines, the id
/// is not a base-10 integer, or the time range does not contain exactly one
/// `-->`.
pub fn parse_fragment(raw: &str) -> Result<Fragment, FragmentError> {
    let lines: Vec<&str> = raw.trim().lines().collect();
    let (id_line, range_line, text_lines) = match lines.as_slice() {
        [id_line, range_line, text_lines @ ..] if lines.len() >= MIN_FRAGMENT_LINES => {
            (*id_line, *range_line, text_lines)
        }
        _ => return Err(FragmentError::TooFewLines { lines: lines.len() }),
    };

    let id = id_line
        .trim()
        .parse()
        .map_err(|_err| FragmentError::InvalidId {
            value: id_line.trim().to_owned(),
        })?;

    let bounds: Vec<&str> = range_line.split(TIME_RANGE_SEPARATOR).collect();
    let (start, end) = match bounds.as_slice() {
        [start, end] => (*start, *end),
        _ => {
            return Err(FragmentError::InvalidTimeRange {
                value: range_line.trim().to_owned(),
            });
        }
    };

    Ok(Fragment {
        id,
        text: text_lines.join("\n").trim().to_owned(),
        start_ms: parse_timestamp(start),
        end_ms: parse_timestamp(end),
    })
}

/// Splits subtitle file content into blocks separated by blank lines.
#[must_use]
pub fn split_blocks(content: &str) -> Vec<String> {
    let content = content.trim_start_matches('\u{feff}');
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}
