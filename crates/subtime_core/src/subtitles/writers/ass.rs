//! ASS timestamp rendering.
//!
//! # Timing Precision
//!
//! ASS uses centisecond timing (`H:MM:SS.CC`). Two renderings exist:
//! - [`format_ass_time`] truncates the millisecond remainder to tens. Shifting
//!   uses this.
//! - [`format_ass_time_rounded`] rounds half-up to the nearest ten first.
//!   Frame-rate retiming uses this.
//!
//! The two differ for values that are not multiples of 10 ms and must stay
//! separate: existing outputs of each tool depend on its own behavior.

use crate::subtitles::types::TimestampValue;

/// Format milliseconds as ASS timestamp (`H:MM:SS.CC`), truncating to
/// centiseconds.
pub fn format_ass_time(ms: TimestampValue) -> String {
    let hours = ms / 3_600_000;
    let mins = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1000;
    let centis = (ms % 1000) / 10;

    format!("{}:{:02}:{:02}.{:02}", hours, mins, secs, centis)
}

/// Format milliseconds as ASS timestamp, rounding half-up to centiseconds.
///
/// Rounding happens on the whole value so a `.995` remainder carries into
/// the seconds field.
pub fn format_ass_time_rounded(ms: TimestampValue) -> String {
    let rounded = ms.saturating_add(5) / 10 * 10;
    format_ass_time(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ass_time() {
        assert_eq!(format_ass_time(0), "0:00:00.00");
        assert_eq!(format_ass_time(1000), "0:00:01.00");
        assert_eq!(format_ass_time(1500), "0:00:01.50");
        assert_eq!(format_ass_time(60000), "0:01:00.00");
        assert_eq!(format_ass_time(3600000), "1:00:00.00");
        assert_eq!(format_ass_time(36_000_000), "10:00:00.00");
        assert_eq!(format_ass_time(11_500), "0:00:11.50");
    }

    #[test]
    fn test_format_ass_time_truncates() {
        assert_eq!(format_ass_time(1234), "0:00:01.23");
        assert_eq!(format_ass_time(1239), "0:00:01.23");
        assert_eq!(format_ass_time(59_999), "0:00:59.99");
    }

    #[test]
    fn test_format_ass_time_rounded() {
        assert_eq!(format_ass_time_rounded(1234), "0:00:01.23");
        assert_eq!(format_ass_time_rounded(1235), "0:00:01.24");
        assert_eq!(format_ass_time_rounded(1239), "0:00:01.24");
        assert_eq!(format_ass_time_rounded(9600), "0:00:09.60");

        // Carry into seconds and minutes
        assert_eq!(format_ass_time_rounded(1995), "0:00:02.00");
        assert_eq!(format_ass_time_rounded(59_996), "0:01:00.00");
    }
}
