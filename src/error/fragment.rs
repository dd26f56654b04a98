use thiserror::Error;

/// Reasons a raw text block is rejected by the fragment parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FragmentError {
    #[error("Fragment needs an id line, a time range line and text; got {lines} line(s).")]
    TooFewLines { lines: usize },
    #[error("Invalid fragment id '{value}'.")]
    InvalidId { value: String },
    #[error("Invalid time range '{value}'. Expected exactly one '-->'.")]
    InvalidTimeRange { value: String },
}
