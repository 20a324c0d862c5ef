//! Settings struct with TOML-based sections.
//!
//! Every key has a default, so a partial (or empty) file is valid.

use serde::{Deserialize, Serialize};

use crate::batch::DEFAULT_EXTENSIONS;
use crate::logging::LogLevel;
use crate::subtitles::{ShiftDirection, COMMON_FRAMERATES};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Shift defaults.
    #[serde(default)]
    pub shift: ShiftSettings,

    /// Frame-rate conversion defaults.
    #[serde(default)]
    pub framerate: FramerateSettings,

    /// Batch processing.
    #[serde(default)]
    pub batch: BatchSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Defaults for `shift`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSettings {
    /// Layer list applied when none is given (`all` or e.g. `0,2`).
    #[serde(default = "default_layers")]
    pub default_layers: String,

    /// Direction applied when none is given.
    #[serde(default)]
    pub default_direction: ShiftDirection,
}

fn default_layers() -> String {
    "all".to_string()
}

impl Default for ShiftSettings {
    fn default() -> Self {
        Self {
            default_layers: default_layers(),
            default_direction: ShiftDirection::default(),
        }
    }
}

/// Defaults for `framerate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramerateSettings {
    /// Source rate used when `--from` is omitted.
    #[serde(default = "default_source_rate")]
    pub source_rate: f64,

    /// Rates listed by `subtime framerates`.
    #[serde(default = "default_common_rates")]
    pub common_rates: Vec<f64>,
}

fn default_source_rate() -> f64 {
    23.976
}

fn default_common_rates() -> Vec<f64> {
    COMMON_FRAMERATES.to_vec()
}

impl Default for FramerateSettings {
    fn default() -> Self {
        Self {
            source_rate: default_source_rate(),
            common_rates: default_common_rates(),
        }
    }
}

/// Batch processing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Worker threads (0 = one per CPU).
    #[serde(default)]
    pub workers: usize,

    /// Extensions picked up by directory scans.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            workers: 0,
            extensions: default_extensions(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Level used when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
}
