use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration_value;
use crate::error::ValidationError;

/// Overlay settings read from `subcast.toml` / `subcast.json`.
///
/// Every field is optional; values given on the command line take precedence.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub bind: Option<String>,
    #[serde(alias = "buffer_capacity")]
    pub capacity: Option<u64>,
    #[serde(alias = "lines")]
    pub max_lines: Option<u64>,
    pub tail: Option<u64>,
    pub width: Option<u64>,
    pub fade_in: Option<DurationValue>,
    pub hide_after: Option<DurationValue>,
    pub fade_out: Option<DurationValue>,
    pub frame_interval: Option<DurationValue>,
    pub no_ui: Option<bool>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}
