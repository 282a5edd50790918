//! Argument handling and the stdout result contract.

use anyhow::Context;
use clap::Args;
use imgconv_core::{Config, ConversionSummary, ImageConverter, SUCCESS_MESSAGE};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Positional arguments.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input image path
    pub input: PathBuf,

    /// Output directory path
    pub output_directory: PathBuf,
}

/// Load the explicit config file, or the default one if present.
///
/// A broken default config only warns and falls back to defaults; a broken
/// explicit one is an error.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check {}",
                Config::default_path().display()
            );
            Config::default()
        })),
    }
}

/// Validate, load and convert.
pub async fn execute(config: &Config, args: &ConvertArgs) -> anyhow::Result<ConversionSummary> {
    let summary = ImageConverter::convert(config, &args.input, &args.output_directory).await?;
    Ok(summary)
}

pub fn report_success() -> ExitCode {
    println!("{}", SUCCESS_MESSAGE);
    ExitCode::SUCCESS
}

/// Print the single error line and pick the exit code.
pub fn report_failure(err: &anyhow::Error) -> ExitCode {
    println!("{}", error_line(err));
    ExitCode::FAILURE
}

fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {err}")
}
