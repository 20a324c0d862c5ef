//! Timestamp parsers for the two textual encodings.
//!
//! Each parser is a pure function from text to milliseconds.

mod ass;
mod srt;

pub use ass::{parse_ass_time, parse_layer, split_dialogue, DIALOGUE_FIELDS, DIALOGUE_PREFIX};
pub use srt::{parse_srt_time, split_timing, TIMING_SEPARATOR};

/// Parse an all-digit field, optionally of an exact width.
fn digits(s: &str, width: Option<usize>) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if width.is_some_and(|w| s.len() != w) {
        return None;
    }
    s.parse().ok()
}

/// `((h * 3600 + m * 60 + s) * 1000) + frac_ms`, `None` on overflow.
fn compose_ms(hours: u64, minutes: u64, seconds: u64, frac_ms: u64) -> Option<u64> {
    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?
        .checked_mul(1000)?
        .checked_add(frac_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digits("07", Some(2)), Some(7));
        assert_eq!(digits("7", Some(2)), None);
        assert_eq!(digits("123", None), Some(123));
        assert_eq!(digits("", None), None);
        assert_eq!(digits("+1", None), None);
    }
}
