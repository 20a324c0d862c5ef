//! Constant-offset retime.
//!
//! Adds the same signed delta to every timestamp. Results below zero are
//! clamped to zero; there is no error case.

use crate::subtitles::types::{ShiftDirection, ShiftSpec, TimestampEncoding, TimestampValue};
use crate::subtitles::writers::format_time;

use super::Retime;

/// Shift retime mode.
#[derive(Debug, Clone, Copy)]
pub struct ShiftRetime {
    delta_ms: i64,
}

impl ShiftRetime {
    pub fn new(spec: ShiftSpec) -> Self {
        Self {
            delta_ms: spec.effective_delta(),
        }
    }

    /// Signed delta applied to each timestamp.
    pub fn delta_ms(&self) -> i64 {
        self.delta_ms
    }
}

impl Retime for ShiftRetime {
    fn name(&self) -> &str {
        "shift"
    }

    fn describe(&self) -> String {
        let direction = if self.delta_ms < 0 {
            ShiftDirection::Advance
        } else {
            ShiftDirection::Delay
        };
        format!("{:?} by {}ms", direction, self.delta_ms.unsigned_abs())
    }

    fn apply(&self, ms: TimestampValue) -> TimestampValue {
        let shifted = i128::from(ms) + i128::from(self.delta_ms);
        shifted.clamp(0, i128::from(u64::MAX)) as u64
    }

    fn render(&self, ms: TimestampValue, encoding: TimestampEncoding) -> String {
        format_time(ms, encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(delta_ms: i64, direction: ShiftDirection) -> ShiftRetime {
        ShiftRetime::new(ShiftSpec::new(delta_ms, direction))
    }

    #[test]
    fn test_positive_offset() {
        let delay = shift(1500, ShiftDirection::Delay);
        assert_eq!(delay.apply(10_000), 11_500);
        assert_eq!(delay.apply(0), 1500);
    }

    #[test]
    fn test_negative_offset_clamped() {
        let advance = shift(6000, ShiftDirection::Advance);
        assert_eq!(advance.apply(5000), 0);
        assert_eq!(advance.apply(7000), 1000);
        assert_eq!(advance.apply(6000), 0);
    }

    #[test]
    fn test_never_negative_or_overflowing() {
        assert_eq!(shift(i64::MIN, ShiftDirection::Delay).apply(1000), 0);
        assert_eq!(shift(i64::MAX, ShiftDirection::Advance).apply(1000), 0);
        assert_eq!(shift(1, ShiftDirection::Delay).apply(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_inverse_shift_restores_value() {
        for (ms, delta) in [(10_000, 1500), (5000, 5000), (123_456, 99_999)] {
            let there = shift(delta, ShiftDirection::Delay).apply(ms);
            let back = shift(delta, ShiftDirection::Advance).apply(there);
            assert_eq!(back, ms);

            let there = shift(delta, ShiftDirection::Advance).apply(ms);
            let back = shift(delta, ShiftDirection::Delay).apply(there);
            assert_eq!(back, ms);
        }
    }

    #[test]
    fn test_render_truncates_centiseconds() {
        let delay = shift(7, ShiftDirection::Delay);
        assert_eq!(delay.retime(1000, TimestampEncoding::Centisecond), "0:00:01.00");
        assert_eq!(delay.retime(1000, TimestampEncoding::Millisecond), "00:00:01,007");
    }

    #[test]
    fn test_describe() {
        assert_eq!(shift(1500, ShiftDirection::Delay).describe(), "Delay by 1500ms");
        assert_eq!(shift(1500, ShiftDirection::Advance).describe(), "Advance by 1500ms");
    }
}
