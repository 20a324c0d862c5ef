//! Timestamp transforms.
//!
//! Pluggable retime strategies applied to every selected timestamp.
//!
//! # Available Modes
//!
//! - **Shift**: constant additive offset, clamped at zero.
//! - **Framerate**: proportional rescale from a source to a target frame rate.
//!
//! Each strategy also owns how its results are rendered back to text, since
//! the two modes round centiseconds differently.

mod framerate;
mod shift;

pub use framerate::FramerateRetime;
pub use shift::ShiftRetime;

use crate::subtitles::types::{FramerateSpec, ShiftSpec, TimestampEncoding, TimestampValue};

/// A configured retime operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RetimeMode {
    /// Constant shift; files are overwritten in place.
    Shift(ShiftSpec),
    /// Frame-rate conversion; output goes to a derived file name.
    Framerate(FramerateSpec),
}

impl RetimeMode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shift(_) => "shift",
            Self::Framerate(_) => "framerate",
        }
    }
}

/// Trait for retime implementations.
///
/// Implementations are stateless per timestamp, so lines can be processed in
/// any order.
pub trait Retime: Send + Sync {
    /// Get the name of this retime mode.
    fn name(&self) -> &str;

    /// Human-readable summary of the configured operation.
    fn describe(&self) -> String;

    /// Transform a timestamp. Never negative.
    fn apply(&self, ms: TimestampValue) -> TimestampValue;

    /// Render a transformed timestamp in the line's encoding.
    fn render(&self, ms: TimestampValue, encoding: TimestampEncoding) -> String;

    /// Transform and render in one step.
    fn retime(&self, ms: TimestampValue, encoding: TimestampEncoding) -> String {
        self.render(self.apply(ms), encoding)
    }
}

/// Create a retime strategy from a mode.
pub fn create_retime(mode: RetimeMode) -> Box<dyn Retime> {
    match mode {
        RetimeMode::Shift(spec) => Box::new(ShiftRetime::new(spec)),
        RetimeMode::Framerate(spec) => Box::new(FramerateRetime::new(spec)),
    }
}
