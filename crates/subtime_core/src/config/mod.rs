//! Configuration management for subtime.
//!
//! This module provides:
//! - TOML-based configuration with one section per concern
//! - Atomic file writes (write to temp, then rename)
//! - Defaults for every missing key
//!
//! # Example
//!
//! ```no_run
//! use subtime_core::config::ConfigManager;
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new("subtime.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Default layers: {}", config.settings().shift.default_layers);
//!
//! // Modify a setting and persist it
//! config.settings_mut().batch.workers = 4;
//! config.save().unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigManager, SettingsError, SettingsResult};
pub use settings::{BatchSettings, FramerateSettings, LoggingSettings, Settings, ShiftSettings};
