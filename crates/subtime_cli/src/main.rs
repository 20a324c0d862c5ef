//! subtime command-line front end.
//!
//! Exit codes: 0 when every file succeeded, 1 when any file failed (or a
//! directory could not be scanned), 2 when the operation itself is invalid.

mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use subtime_core::batch::{scan_directory_with, BatchJob, BatchProcessor, BatchSummary};
use subtime_core::config::{ConfigManager, Settings, SettingsError};
use subtime_core::logging::{try_init_tracing, LogLevel};
use subtime_core::subtitles::{
    ConfigError, FramerateSpec, LayerSet, RetimeMode, ShiftDirection, ShiftSpec,
};

use cli::{Cli, Commands};

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_INVALID: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_code_for(&err)
        }
    };
    ExitCode::from(code)
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() || err.downcast_ref::<SettingsError>().is_some()
    {
        EXIT_INVALID
    } else {
        EXIT_FAILURE
    }
}

fn run(cli: Cli) -> Result<u8> {
    let settings = load_settings(&cli.config, cli.init_config)?;

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        settings.logging.level
    };
    try_init_tracing(level);
    tracing::debug!("subtime {}", subtime_core::version());

    match cli.command {
        Commands::Shift {
            offset,
            advance,
            delay,
            layers,
            dir,
            json,
            inputs,
        } => {
            let direction = if advance {
                ShiftDirection::Advance
            } else if delay {
                ShiftDirection::Delay
            } else {
                settings.shift.default_direction
            };
            let spec = ShiftSpec::parse(&offset, direction)?;
            let layers = layers.as_deref().unwrap_or(&settings.shift.default_layers);
            let layers = LayerSet::parse(layers)?;

            let files = if inputs.is_empty() {
                let dir = dir.unwrap_or_else(|| PathBuf::from("."));
                scan_directory_with(&dir, &settings.batch.extensions)
                    .with_context(|| format!("Cannot scan {}", dir.display()))?
            } else {
                inputs
            };

            let job = BatchJob::new(RetimeMode::Shift(spec), layers);
            report(&run_batch(&settings, &files, &job), json)
        }

        Commands::Framerate {
            from,
            to,
            layers,
            json,
            inputs,
        } => {
            let source = from.unwrap_or_else(|| format!("{:?}", settings.framerate.source_rate));
            let spec = FramerateSpec::parse(&source, &to)?;
            let layers = LayerSet::parse(layers.as_deref().unwrap_or_default())?;

            let job = BatchJob::new(RetimeMode::Framerate(spec), layers);
            report(&run_batch(&settings, &inputs, &job), json)
        }

        Commands::Framerates => {
            for rate in &settings.framerate.common_rates {
                println!("{:?}", rate);
            }
            Ok(EXIT_SUCCESS)
        }
    }
}

/// Settings from `path`; defaults when the file is absent and not requested.
fn load_settings(path: &Path, create: bool) -> Result<Settings> {
    let mut manager = ConfigManager::new(path);
    let loaded = if create {
        manager.load_or_create()
    } else if path.exists() {
        manager.load()
    } else {
        return Ok(Settings::default());
    };
    loaded.with_context(|| format!("Invalid settings file {}", manager.path().display()))?;
    Ok(manager.settings().clone())
}

fn run_batch(settings: &Settings, files: &[PathBuf], job: &BatchJob) -> BatchSummary {
    BatchProcessor::new(settings.batch.workers).run(files, job)
}

fn report(summary: &BatchSummary, json: bool) -> Result<u8> {
    if json {
        println!("{}", summary.to_json()?);
    } else if summary.total == 0 {
        println!("No subtitle files found");
    } else {
        println!(
            "Processed {} files: {} succeeded, {} failed",
            summary.total, summary.succeeded, summary.failed
        );
        for failure in &summary.failures {
            println!("  {}: {}", failure.file, failure.reason);
        }
        if summary.diagnostics > 0 {
            println!(
                "{} timing lines could not be parsed and were left unchanged",
                summary.diagnostics
            );
        }
    }

    Ok(if summary.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}
