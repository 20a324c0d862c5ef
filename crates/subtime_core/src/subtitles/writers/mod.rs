//! Timestamp writers for the two textual encodings.
//!
//! Each writer is a pure function from milliseconds to text.

mod ass;
mod srt;

pub use ass::{format_ass_time, format_ass_time_rounded};
pub use srt::format_srt_time;

use crate::subtitles::types::{TimestampEncoding, TimestampValue};

/// Format a timestamp in the given encoding (centiseconds truncated).
pub fn format_time(ms: TimestampValue, encoding: TimestampEncoding) -> String {
    match encoding {
        TimestampEncoding::Centisecond => format_ass_time(ms),
        TimestampEncoding::Millisecond => format_srt_time(ms),
    }
}
