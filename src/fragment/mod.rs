//! Wire fragments: the subtitle record, its text encoding, and the parser.
mod parse;
mod timestamp;


pub use parse::{parse_fragment, split_blocks};
pub use timestamp::{format_timestamp, parse_timestamp};

/// Stable logical identifier shared by every revision of one utterance.
pub type FragmentId = i64;

/// Token separating the start and end timestamps on a fragment's second line.
pub const TIME_RANGE_SEPARATOR: &str = "-->";

/// One parsed subtitle revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub id: FragmentId,
    pub text: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl Fragment {
    #[must_use]
    pub fn new(id: FragmentId, text: impl Into<String>, start_ms: u64, end_ms: u64) -> Self {
        Self {
            id,
            text: text.into(),
            start_ms,
            end_ms,
        }
    }

    /// Encodes the fragment in the datagram block format accepted by [`parse_fragment`].
    #[must_use]
    pub fn to_wire_text(&self) -> String {
        format!(
            "{}\n{} {} {}\n{}",
            self.id,
            format_timestamp(self.start_ms),
            TIME_RANGE_SEPARATOR,
            format_timestamp(self.end_ms),
            self.text
        )
    }
}
