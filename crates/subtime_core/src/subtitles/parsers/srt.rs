//! SRT timestamp and timing-line parsing.
//!
//! # Format Overview
//!
//! SRT files consist of sequential entries:
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! Hello, world!
//! ```
//!
//! Only the timing line is touched; index, text and blank lines are passed
//! through unchanged.

use crate::subtitles::error::FormatError;
use crate::subtitles::types::{TimestampEncoding, TimestampValue};

use super::{compose_ms, digits};

/// Separator between the two timestamps of a timing line.
pub const TIMING_SEPARATOR: &str = " --> ";

/// Parse SRT timestamp: `HH:MM:SS,mmm`.
///
/// A colon is accepted in place of the comma; the comma is normalized to a
/// colon and the value must then split into exactly four numeric parts.
/// Returns milliseconds.
pub fn parse_srt_time(s: &str) -> Result<TimestampValue, FormatError> {
    let invalid = || FormatError::new(s, TimestampEncoding::Millisecond);

    let normalized = s.trim().replace(',', ":");
    let mut parts = normalized.split(':').map(str::trim);
    let (Some(h), Some(m), Some(sec), Some(ms), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return Err(invalid());
    };

    let hours = digits(h, None).ok_or_else(invalid)?;
    let minutes = digits(m, None).ok_or_else(invalid)?;
    let seconds = digits(sec, None).ok_or_else(invalid)?;
    let millis = digits(ms, None).ok_or_else(invalid)?;

    compose_ms(hours, minutes, seconds, millis).ok_or_else(invalid)
}

/// Split an SRT timing line once on [`TIMING_SEPARATOR`].
pub fn split_timing(line: &str) -> Option<(&str, &str)> {
    line.split_once(TIMING_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_srt_time() {
        assert_eq!(parse_srt_time("00:00:00,000").unwrap(), 0);
        assert_eq!(parse_srt_time("00:00:01,000").unwrap(), 1000);
        assert_eq!(parse_srt_time("00:00:01,500").unwrap(), 1500);
        assert_eq!(parse_srt_time("00:01:00,000").unwrap(), 60000);
        assert_eq!(parse_srt_time("01:00:00,000").unwrap(), 3600000);

        // Colon in place of the comma
        assert_eq!(parse_srt_time("00:00:01:500").unwrap(), 1500);

        // Surrounding whitespace and trailing newline
        assert_eq!(parse_srt_time(" 00:00:07,250\n").unwrap(), 7250);
    }

    #[test]
    fn test_parse_srt_time_rejects_bad_grammar() {
        assert!(parse_srt_time("00:00:01.500").is_err());
        assert!(parse_srt_time("00:01,500").is_err());
        assert!(parse_srt_time("00:00:01,500,1").is_err());
        assert!(parse_srt_time("00:00:xx,500").is_err());
        assert!(parse_srt_time("00:00:-1,500").is_err());
        assert!(parse_srt_time("").is_err());
    }

    #[test]
    fn test_split_timing() {
        let (start, end) = split_timing("00:00:01,000 --> 00:00:04,500").unwrap();
        assert_eq!(start, "00:00:01,000");
        assert_eq!(end, "00:00:04,500");

        // Only the first separator splits
        let (_, end) = split_timing("a --> b --> c").unwrap();
        assert_eq!(end, "b --> c");

        assert!(split_timing("Hello").is_none());
    }
}
