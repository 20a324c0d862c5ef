//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "subtime")]
#[command(about = "Shift and frame-rate retime ASS/SSA/SRT subtitle timestamps")]
#[command(version)]
pub struct Cli {
    /// Settings file
    #[arg(long, global = true, value_name = "PATH", default_value = "subtime.toml")]
    pub config: PathBuf,

    /// Create the settings file with defaults if it does not exist
    #[arg(long, global = true)]
    pub init_config: bool,

    /// Log debug details, including every line left unchanged
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Shift every timestamp by a constant offset, overwriting files in place
    Shift {
        /// Offset in seconds (fractions allowed, negative moves earlier)
        #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
        offset: String,

        /// Move subtitles earlier instead of later
        #[arg(long, conflicts_with = "delay")]
        advance: bool,

        /// Move subtitles later (overrides a configured `advance` default)
        #[arg(long)]
        delay: bool,

        /// Dialogue layers to retime, e.g. `0,2` (default: all)
        #[arg(long, value_name = "LIST")]
        layers: Option<String>,

        /// Directory to scan when no files are given (default: current directory)
        #[arg(long, value_name = "DIR", conflicts_with = "inputs")]
        dir: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Subtitle files to process
        inputs: Vec<PathBuf>,
    },

    /// Rescale timestamps from one frame rate to another, writing new files
    Framerate {
        /// Source frame rate (default: configured source rate)
        #[arg(long, value_name = "FPS")]
        from: Option<String>,

        /// Target frame rate
        #[arg(long, value_name = "FPS")]
        to: String,

        /// Dialogue layers to retime, e.g. `0,2` (default: all)
        #[arg(long, value_name = "LIST")]
        layers: Option<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Subtitle files to convert
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// List common frame rates
    Framerates,
}
