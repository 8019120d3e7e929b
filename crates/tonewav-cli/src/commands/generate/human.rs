//! Human-readable (colored) output mode for the generate command.

use anyhow::Result;
use colored::Colorize;
use log::info;
use std::process::ExitCode;
use std::time::Instant;
use tonewav_synth::{render, SynthError};

use super::{exit_code_for, GenerateOptions, OutputTarget};
use crate::input::load_config;

/// Run generate with human-readable (colored) output.
///
/// When the WAVE bytes go to stdout, the summary is written to stderr so the
/// stream stays a valid file.
pub fn run_human(options: &GenerateOptions) -> Result<ExitCode> {
    let start = Instant::now();
    let to_stdout = options.target == OutputTarget::Stdout;

    let status = |line: String| {
        if to_stdout {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    if let Some(path) = &options.config_path {
        status(format!("{} {}", "Config:".cyan().bold(), path.display()));
    }

    let config = match load_config(options.config_path.as_deref(), &options.overrides) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e);
            return Ok(ExitCode::from(1));
        }
    };

    status(format!(
        "{} {} Hz for {} samples ({:.3}s) at {} Hz, {}-bit, {} channel(s)",
        "Rendering:".cyan().bold(),
        config.frequency,
        config.duration_samples,
        config.duration_seconds(),
        config.sample_rate,
        config.bit_depth,
        config.channel_count
    ));

    let wave = match render(&config) {
        Ok(wave) => wave,
        Err(e) => {
            print_error(&e);
            return Ok(exit_code_for(&e));
        }
    };

    if let Err(e) = options.target.deliver(&wave) {
        print_error(&e);
        return Ok(ExitCode::from(2));
    }
    info!("delivered {} bytes to {}", wave.len(), options.target.display());

    let elapsed = start.elapsed();
    status(format!(
        "{} {} ({} bytes, {} data)",
        "Wrote:".green().bold(),
        options.target.display(),
        wave.len(),
        wave.pcm_data().len()
    ));
    status(format!("  {} {}", "PCM hash:".dimmed(), wave.pcm_hash()));
    status(format!(
        "{} in {}ms",
        "Done".green().bold(),
        elapsed.as_millis()
    ));

    Ok(ExitCode::SUCCESS)
}

fn print_error(err: &SynthError) {
    eprintln!("{} [{}] {}", "error:".red().bold(), err.code(), err);
}
