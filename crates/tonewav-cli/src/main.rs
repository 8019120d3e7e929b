//! tonewav CLI - Command-line interface for sine tone rendering
//!
//! This binary renders 16-bit PCM WAVE files and inspects their headers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

// Use modules from the library crate
use tonewav_cli::commands;
use tonewav_cli::commands::generate::{GenerateOptions, OutputTarget};
use tonewav_cli::input::ConfigOverrides;

/// tonewav - Sine tone WAVE generator
#[derive(Parser)]
#[command(name = "tonewav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sine tone to a WAVE file
    Generate {
        /// Path to a JSON render config
        #[arg(short, long)]
        config: Option<String>,

        /// Tone frequency in Hz
        #[arg(short, long)]
        frequency: Option<f64>,

        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Duration as a number of samples
        #[arg(long, conflicts_with = "seconds")]
        samples: Option<usize>,

        /// Duration in seconds
        #[arg(long)]
        seconds: Option<f64>,

        /// Number of channels (each sample is written to every channel)
        #[arg(long)]
        channels: Option<u16>,

        /// Bits per sample (only 16 is supported)
        #[arg(long)]
        bit_depth: Option<u16>,

        /// Output file path (default: tone.wav)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<String>,

        /// Write the WAVE bytes to stdout
        #[arg(long, conflicts_with = "json")]
        stdout: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode and print the header of a WAVE file
    Inspect {
        /// Path to the WAVE file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .init();

    let result = match cli.command {
        Commands::Generate {
            config,
            frequency,
            sample_rate,
            samples,
            seconds,
            channels,
            bit_depth,
            output,
            stdout,
            json,
        } => {
            let options = GenerateOptions {
                config_path: config.map(PathBuf::from),
                overrides: ConfigOverrides {
                    frequency,
                    sample_rate,
                    samples,
                    seconds,
                    channels,
                    bit_depth,
                },
                target: OutputTarget::from_options(output.as_deref(), stdout),
            };
            commands::generate::run(&options, json)
        }
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    finish(result)
}

/// Maps a command result to the process exit code.
///
/// Commands report their own domain errors; anything that escapes as an
/// `anyhow` error is an unexpected failure and exits with 2.
fn finish(result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(2)
        }
    }
}
