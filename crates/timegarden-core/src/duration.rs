//! Conversions between whole seconds and `HH:MM:SS` display strings.

/// One positional field of an `HH:MM:SS` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationField {
    Hours,
    Minutes,
    Seconds,
}

/// Format a second count as `HH:MM:SS`, each field zero-padded to two digits.
///
/// Hours are not capped: past 99 hours the field simply widens to three or
/// more digits.
pub fn seconds_to_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Combine hour/minute/second components into a total second count.
///
/// No range validation: negative or out-of-range components propagate into
/// the result, which is the caller's responsibility to avoid.
pub fn duration_to_seconds(hours: i64, minutes: i64, seconds: i64) -> i64 {
    hours * 3600 + minutes * 60 + seconds
}

/// Slice one field out of an `HH:MM:SS` string, anchored on the first colon.
///
/// This is a lexical slice, not a validated parse: a malformed input yields
/// an empty or wrong substring rather than an error, and callers that need a
/// number must guard the parse themselves.
pub fn extract_field(duration: &str, field: DurationField) -> &str {
    let Some(colon) = duration.find(':') else {
        return "";
    };
    let range = match field {
        DurationField::Hours => 0..colon,
        DurationField::Minutes => colon + 1..colon + 3,
        DurationField::Seconds => colon + 4..colon + 6,
    };
    duration.get(range).unwrap_or("")
}
