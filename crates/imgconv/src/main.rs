//! imgconv CLI - convert an image to black and white and create a thumbnail.
//!
//! Writes `{name}_bw{ext}` and `{name}_thumbnail{ext}` into the output
//! directory. Stdout carries exactly one result line; logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! imgconv photo.png out/
//!
//! # Debug logging, JSON formatted
//! imgconv -v --json-logs photo.png out/
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;
mod logging;

/// Convert an image to black and white and create a thumbnail.
#[derive(Parser, Debug)]
#[command(name = "imgconv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    args: cli::ConvertArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config problems go straight to the
    // result line and stderr.
    let config = match cli::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}");
            return cli::report_failure(&e);
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("imgconv v{}", imgconv_core::VERSION);

    match cli::execute(&config, &cli.args).await {
        Ok(_) => cli::report_success(),
        Err(e) => cli::report_failure(&e),
    }
}
