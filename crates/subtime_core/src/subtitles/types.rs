//! Core timestamp-engine types.
//!
//! All timing values are integer milliseconds (`u64`). Negative results of a
//! transform are clamped to zero rather than reported.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Non-negative millisecond count.
pub type TimestampValue = u64;

/// Frame rates commonly offered for retiming.
pub const COMMON_FRAMERATES: [f64; 10] = [
    23.976, 24.0, 24.417, 25.0, 29.97, 30.0, 50.0, 59.94, 60.0, 120.0,
];

/// Supported subtitle formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    /// Advanced SubStation Alpha (.ass) and SubStation Alpha (.ssa)
    Ass,
    /// SubRip (.srt)
    Srt,
}

impl SubtitleFormat {
    /// Detect format from file extension (case-insensitive).
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "ass" | "ssa" => Some(Self::Ass),
            "srt" => Some(Self::Srt),
            _ => None,
        }
    }

    /// The timestamp encoding used by this format family.
    pub fn encoding(&self) -> TimestampEncoding {
        match self {
            Self::Ass => TimestampEncoding::Centisecond,
            Self::Srt => TimestampEncoding::Millisecond,
        }
    }
}

/// Textual timestamp encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampEncoding {
    /// `H:MM:SS.CC` - unpadded hours, hundredths of a second (ASS/SSA).
    Centisecond,
    /// `HH:MM:SS,mmm` - padded hours, thousandths of a second (SRT).
    Millisecond,
}

impl TimestampEncoding {
    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Centisecond => "H:MM:SS.CC",
            Self::Millisecond => "HH:MM:SS,mmm",
        }
    }
}

/// Direction of a constant shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    /// Move subtitles later.
    #[default]
    Delay,
    /// Move subtitles earlier.
    Advance,
}

/// Constant offset applied to every timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftSpec {
    /// Magnitude of the shift in milliseconds (may itself be negative).
    pub delta_ms: i64,
    /// Whether the delta delays or advances.
    pub direction: ShiftDirection,
}

impl ShiftSpec {
    /// Create a shift from a millisecond delta.
    pub fn new(delta_ms: i64, direction: ShiftDirection) -> Self {
        Self {
            delta_ms,
            direction,
        }
    }

    /// Create a shift from (possibly fractional) seconds.
    ///
    /// Seconds are rounded half away from zero to whole milliseconds.
    pub fn from_seconds(seconds: f64, direction: ShiftDirection) -> Result<Self, ConfigError> {
        if !seconds.is_finite() {
            return Err(ConfigError::invalid_shift(seconds.to_string()));
        }
        let ms = (seconds * 1000.0).round();
        if ms.abs() > i64::MAX as f64 {
            return Err(ConfigError::invalid_shift(seconds.to_string()));
        }
        Ok(Self::new(ms as i64, direction))
    }

    /// Parse a textual seconds value such as `"10.5"` or `"-2.5"`.
    pub fn parse(text: &str, direction: ShiftDirection) -> Result<Self, ConfigError> {
        let seconds: f64 = text
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid_shift(text))?;
        Self::from_seconds(seconds, direction)
    }

    /// Signed delta after applying the direction.
    pub fn effective_delta(&self) -> i64 {
        match self.direction {
            ShiftDirection::Delay => self.delta_ms,
            ShiftDirection::Advance => self.delta_ms.saturating_neg(),
        }
    }
}

/// Proportional frame-rate rescale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramerateSpec {
    source_rate: f64,
    target_rate: f64,
}

impl FramerateSpec {
    /// Create a spec, rejecting non-positive or non-finite rates.
    pub fn new(source_rate: f64, target_rate: f64) -> Result<Self, ConfigError> {
        for rate in [source_rate, target_rate] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ConfigError::invalid_framerate(rate.to_string()));
            }
        }
        Ok(Self {
            source_rate,
            target_rate,
        })
    }

    /// Parse textual rates such as `"23.976"` and `"25"`.
    pub fn parse(source: &str, target: &str) -> Result<Self, ConfigError> {
        let source_rate = parse_rate(source)?;
        let target_rate = parse_rate(target)?;
        Self::new(source_rate, target_rate)
    }

    pub fn source_rate(&self) -> f64 {
        self.source_rate
    }

    pub fn target_rate(&self) -> f64 {
        self.target_rate
    }

    /// Multiplier applied to every timestamp.
    pub fn scale(&self) -> f64 {
        self.source_rate / self.target_rate
    }

    /// Target rate formatted like a float literal (`25.0`, `23.976`).
    pub fn target_label(&self) -> String {
        format!("{:?}", self.target_rate)
    }
}

fn parse_rate(text: &str) -> Result<f64, ConfigError> {
    text.trim()
        .parse()
        .map_err(|_| ConfigError::invalid_framerate(text))
}
