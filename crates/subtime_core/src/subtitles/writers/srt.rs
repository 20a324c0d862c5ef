//! SRT timestamp rendering.

use crate::subtitles::types::TimestampValue;

/// Format milliseconds as SRT timestamp (`HH:MM:SS,mmm`).
///
/// Hours are padded to two digits and grow past them beyond 99 hours.
pub fn format_srt_time(ms: TimestampValue) -> String {
    let hours = ms / 3_600_000;
    let mins = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1000;
    let millis = ms % 1000;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}
