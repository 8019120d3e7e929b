//! Generate command implementation
//!
//! Renders a tone from defaults, a config file and flags, then hands the
//! WAVE buffer to a file or stdout sink.

mod human;
mod json;


use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tonewav_synth::{FileSink, SynthError, WaveFile, WaveSink, WriterSink};

use crate::input::ConfigOverrides;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "tone.wav";

/// Where the rendered file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to a file.
    File(PathBuf),
    /// Stream the raw bytes to stdout.
    Stdout,
}

impl OutputTarget {
    /// Picks the target from the `--output` and `--stdout` flags.
    pub fn from_options(output: Option<&str>, stdout: bool) -> Self {
        if stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(output.unwrap_or(DEFAULT_OUTPUT)))
        }
    }

    /// Display name for reports.
    pub fn display(&self) -> String {
        match self {
            OutputTarget::File(path) => path.display().to_string(),
            OutputTarget::Stdout => "<stdout>".to_string(),
        }
    }

    /// Hands the file to the matching sink.
    pub(crate) fn deliver(&self, wave: &WaveFile) -> Result<(), SynthError> {
        match self {
            OutputTarget::File(path) => FileSink::new(path).accept(wave),
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                let mut sink = WriterSink::new(stdout.lock());
                sink.accept(wave)?;
                sink.into_inner().flush()?;
                Ok(())
            }
        }
    }
}

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Optional JSON config file
    pub config_path: Option<PathBuf>,
    /// Flag overrides
    pub overrides: ConfigOverrides,
    /// Destination
    pub target: OutputTarget,
}

/// Maps a synthesis error to the process exit code.
pub(crate) fn exit_code_for(err: &SynthError) -> ExitCode {
    if err.is_input_error() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}

/// Run the generate command
///
/// # Arguments
/// * `options` - Config sources and output target
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 config could not be loaded or is invalid,
/// 2 generation or output failure
pub fn run(options: &GenerateOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        json::run_json(options)
    } else {
        human::run_human(options)
    }
}
