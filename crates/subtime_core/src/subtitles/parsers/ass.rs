//! ASS/SSA timestamp and Dialogue-line parsing.
//!
//! # Format Overview
//!
//! Only `[Events]` lines starting with `Dialogue: ` carry timing:
//! ```text
//! Dialogue: 0,0:00:01.00,0:00:04.00,Default,,0,0,0,,Hello, world!
//! Dialogue: Marked=0,0:00:01.00,0:00:04.00,Default,NTP,0000,0000,0000,!Effect,Hi
//! ```
//!
//! Field 0 is the layer (`<n>` in ASS, `Marked=<n>` in legacy SSA), fields 1
//! and 2 are `H:MM:SS.CC` timestamps. The text field may itself contain
//! commas, so a line is split into at most 10 fields.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitles::error::FormatError;
use crate::subtitles::types::{TimestampEncoding, TimestampValue};

use super::{compose_ms, digits};

/// Prefix that marks an ASS/SSA timing line.
pub const DIALOGUE_PREFIX: &str = "Dialogue: ";

/// Maximum number of comma-separated fields in a Dialogue line.
pub const DIALOGUE_FIELDS: usize = 10;

static LAYER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Dialogue: (?:Marked=)?([0-9]+)").expect("layer pattern is valid")
});

/// Parse ASS timestamp format: `H:MM:SS.CC`.
///
/// Hours take one or more digits; minutes, seconds and centiseconds take
/// exactly two. Returns milliseconds.
pub fn parse_ass_time(s: &str) -> Result<TimestampValue, FormatError> {
    let invalid = || FormatError::new(s, TimestampEncoding::Centisecond);
    let trimmed = s.trim();

    let mut parts = trimmed.split(':');
    let (Some(h), Some(m), Some(sec_cs), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let (sec, cs) = sec_cs.split_once('.').ok_or_else(invalid)?;

    let hours = digits(h, None).ok_or_else(invalid)?;
    let minutes = digits(m, Some(2)).ok_or_else(invalid)?;
    let seconds = digits(sec, Some(2)).ok_or_else(invalid)?;
    let centis = digits(cs, Some(2)).ok_or_else(invalid)?;

    compose_ms(hours, minutes, seconds, centis * 10).ok_or_else(invalid)
}

/// Extract the layer number from field 0 of a Dialogue line.
///
/// Accepts both `Dialogue: 3` and `Dialogue: Marked=3`. Only the prefix has
/// to match, mirroring how players read the field.
pub fn parse_layer(field: &str) -> Option<i64> {
    LAYER_RE
        .captures(field)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Split a Dialogue line into at most [`DIALOGUE_FIELDS`] fields.
pub fn split_dialogue(line: &str) -> Vec<&str> {
    line.splitn(DIALOGUE_FIELDS, ',').collect()
}
