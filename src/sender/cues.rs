use tracing::{debug, warn};

use crate::error::{AppError, AppResult, IngestError, ValidationError};
use crate::fragment::{Fragment, parse_fragment, split_blocks};

/// Parses every cue of an `.srt` document, skipping blocks that do not parse.
#[must_use]
pub fn parse_cues(content: &str) -> (Vec<Fragment>, usize) {
    let mut cues = Vec::new();
    let mut skipped = 0_usize;
    for (index, block) in split_blocks(content).iter().enumerate() {
        match parse_fragment(block) {
            Ok(cue) => cues.push(cue),
            Err(err) => {
                skipped = skipped.saturating_add(1);
                warn!(block = index.saturating_add(1), "Skipping malformed cue: {}", err);
            }
        }
    }
    (cues, skipped)
}

/// Reads an `.srt` file and returns its cues in file order.
///
/// # Errors
///
/// Returns an error when the file cannot be read or contains no valid cue.
pub fn load_cues(path: &str) -> AppResult<Vec<Fragment>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::ingest(IngestError::ReadSubtitles {
            path: path.to_owned(),
            source: err,
        })
    })?;
    let (cues, skipped) = parse_cues(&content);
    if cues.is_empty() {
        return Err(AppError::validation(ValidationError::NoCues {
            path: path.to_owned(),
        }));
    }
    debug!(path, cues = cues.len(), skipped, "Loaded subtitle cues");
    Ok(cues)
}

/// Expands a cue into the revisions a live captioner would emit: one per
/// word prefix, ending with the full cue. `end_ms` grows with each prefix.
#[must_use]
pub fn grow_revisions(cue: &Fragment) -> Vec<Fragment> {
    let words: Vec<&str> = cue.text.split_whitespace().collect();
    let total = words.len();
    if total <= 1 {
        return vec![cue.clone()];
    }

    let span = cue.end_ms.saturating_sub(cue.start_ms);
    let mut revisions = Vec::with_capacity(total);
    for count in 1..total {
        let prefix = words.get(..count).unwrap_or_default().join(" ");
        let elapsed = span
            .saturating_mul(count as u64)
            .checked_div(total as u64)
            .unwrap_or_default();
        revisions.push(Fragment::new(
            cue.id,
            prefix,
            cue.start_ms,
            cue.start_ms.saturating_add(elapsed),
        ));
    }
    revisions.push(cue.clone());
    revisions
}

/// Flattens cues into the datagram sequence, expanding each cue when `grow` is set.
#[must_use]
pub fn plan_datagrams(cues: &[Fragment], grow: bool) -> Vec<Fragment> {
    if grow {
        cues.iter().flat_map(grow_revisions).collect()
    } else {
        cues.to_vec()
    }
}
