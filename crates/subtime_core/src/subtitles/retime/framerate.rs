//! Frame-rate retime.
//!
//! Rescales every timestamp by `source_rate / target_rate`, for subtitles
//! authored against a video at one frame rate and played at another.
//! Results are rounded half-up to the millisecond; centisecond output is
//! rounded half-up again to the nearest ten.

use crate::subtitles::types::{FramerateSpec, TimestampEncoding, TimestampValue};
use crate::subtitles::writers::{format_ass_time_rounded, format_srt_time};

use super::Retime;

/// Frame-rate retime mode.
#[derive(Debug, Clone, Copy)]
pub struct FramerateRetime {
    spec: FramerateSpec,
}

impl FramerateRetime {
    pub fn new(spec: FramerateSpec) -> Self {
        Self { spec }
    }
}

impl Retime for FramerateRetime {
    fn name(&self) -> &str {
        "framerate"
    }

    fn describe(&self) -> String {
        format!(
            "{:?} fps -> {:?} fps (x{:.6})",
            self.spec.source_rate(),
            self.spec.target_rate(),
            self.spec.scale()
        )
    }

    fn apply(&self, ms: TimestampValue) -> TimestampValue {
        let scaled = (ms as f64 * self.spec.scale() + 0.5).floor();
        // `as` saturates: NaN and negatives become 0
        scaled.max(0.0) as u64
    }

    fn render(&self, ms: TimestampValue, encoding: TimestampEncoding) -> String {
        match encoding {
            TimestampEncoding::Centisecond => format_ass_time_rounded(ms),
            TimestampEncoding::Millisecond => format_srt_time(ms),
        }
    }
}
