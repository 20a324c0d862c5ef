//! Config manager for loading and saving the settings file.
//!
//! Key features:
//! - Atomic writes (write to temp file, then rename)
//! - Defaults for every missing key
//! - Commented output on save

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::Settings;

/// Errors that can occur during settings file operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for settings file operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Manages the settings file.
pub struct ConfigManager {
    /// Path to the config file.
    config_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not load the config - call `load()` or `load_or_create()` after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a mutable reference to the current settings.
    ///
    /// Note: Changes made here are only in memory until `save()` is called.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Load config from file.
    ///
    /// Returns error if file doesn't exist.
    pub fn load(&mut self) -> SettingsResult<()> {
        if !self.config_path.exists() {
            return Err(SettingsError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = toml::from_str(&content)?;
        tracing::debug!("Loaded settings from {}", self.config_path.display());
        Ok(())
    }

    /// Load config from file, creating it with defaults if it doesn't exist.
    pub fn load_or_create(&mut self) -> SettingsResult<()> {
        if self.config_path.exists() {
            return self.load();
        }

        self.settings = Settings::default();
        self.save()?;
        tracing::info!("Created default settings at {}", self.config_path.display());
        Ok(())
    }

    /// Save the entire config atomically.
    ///
    /// Writes to a temp file first, then renames to ensure atomic write.
    pub fn save(&self) -> SettingsResult<()> {
        let content = self.generate_config_with_comments()?;
        self.atomic_write(&content)?;
        Ok(())
    }

    /// Generate config content with a comment above each section.
    fn generate_config_with_comments(&self) -> SettingsResult<String> {
        let mut output = String::new();

        output.push_str("# subtime configuration\n");
        output.push_str("# Command-line flags override these values.\n\n");

        let sections = [
            (
                "# Defaults for `subtime shift`",
                "shift",
                toml::to_string_pretty(&self.settings.shift)?,
            ),
            (
                "# Defaults for `subtime framerate`",
                "framerate",
                toml::to_string_pretty(&self.settings.framerate)?,
            ),
            (
                "# Batch processing (workers = 0 uses one thread per CPU)",
                "batch",
                toml::to_string_pretty(&self.settings.batch)?,
            ),
            (
                "# Log level used when RUST_LOG is not set",
                "logging",
                toml::to_string_pretty(&self.settings.logging)?,
            ),
        ];

        for (i, (comment, table, body)) in sections.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(comment);
            output.push('\n');
            output.push_str(&format!("[{}]\n", table));
            for line in body.lines() {
                output.push_str(line);
                output.push('\n');
            }
        }

        Ok(output)
    }

    /// Write content to config file atomically.
    ///
    /// Writes to a temp file first, then renames.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        // Create parent directory if needed
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to temp file in same directory (for atomic rename)
        let temp_path = self.config_path.with_extension("toml.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }
}
