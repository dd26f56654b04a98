const MS_PER_SECOND: u64 = 1_000;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;

/// Parses `HH:MM:SS,mmm` (or `HH:MM:SS.mmm`) into milliseconds.
///
/// Components that are missing or not integers count as zero, so a garbled
/// field never rejects the whole timestamp.
#[must_use]
pub fn parse_timestamp(value: &str) -> u64 {
    let value = value.trim();
    let (clock, fraction) = value
        .split_once([',', '.'])
        .unwrap_or((value, ""));

    let mut fields = clock.split(':').map(lenient_u64);
    let hours = fields.next().unwrap_or(0);
    let minutes = fields.next().unwrap_or(0);
    let seconds = fields.next().unwrap_or(0);

    let total_seconds = hours
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(seconds);
    total_seconds
        .saturating_mul(MS_PER_SECOND)
        .saturating_add(lenient_u64(fraction))
}

/// Formats milliseconds as `HH:MM:SS,mmm`.
#[must_use]
pub fn format_timestamp(ms: u64) -> String {
    let millis = ms.checked_rem(MS_PER_SECOND).unwrap_or(0);
    let total_seconds = ms.checked_div(MS_PER_SECOND).unwrap_or(0);
    let seconds = total_seconds.checked_rem(SECONDS_PER_MINUTE).unwrap_or(0);
    let minutes = total_seconds
        .checked_div(SECONDS_PER_MINUTE)
        .and_then(|minutes| minutes.checked_rem(SECONDS_PER_MINUTE))
        .unwrap_or(0);
    let hours = total_seconds.checked_div(SECONDS_PER_HOUR).unwrap_or(0);
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

fn lenient_u64(field: &str) -> u64 {
    field.trim().parse().unwrap_or(0)
}
