//! JSON output types for machine-readable CLI output.
//!
//! These records back the `--json` flag on `generate` and `inspect`.

use serde::{Deserialize, Serialize};
use tonewav_synth::{SynthConfig, SynthError, WavHeader, WaveFile};

/// Error codes for CLI operations.
///
/// Synthesis errors pass their own `TONE_XXX` codes through unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Output could not be written
    pub const FILE_WRITE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "TONE_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Config field at fault (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            file: None,
        }
    }

    /// Converts a synthesis error, keeping its code and field.
    pub fn from_synth(err: &SynthError) -> Self {
        let mut json = Self::new(err.code(), err.to_string());
        if let SynthError::InvalidConfiguration { field, .. } = err {
            json.field = Some((*field).to_string());
        }
        json
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Details of the rendered file (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(result: GenerateResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Details of a rendered tone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResult {
    /// Where the file was written
    pub output_path: String,
    /// Config that was rendered
    pub config: SynthConfig,
    /// Total file size in bytes
    pub file_size: usize,
    /// Data payload size in bytes
    pub data_size: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the data payload
    pub pcm_hash: String,
    /// Wall-clock time spent rendering and writing
    pub elapsed_ms: u64,
}

impl GenerateResult {
    /// Builds a result record from a rendered file.
    pub fn new(
        output_path: impl Into<String>,
        config: SynthConfig,
        wave: &WaveFile,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            output_path: output_path.into(),
            config,
            file_size: wave.len(),
            data_size: wave.pcm_data().len(),
            duration_seconds: wave.duration_seconds(),
            pcm_hash: wave.pcm_hash().to_string(),
            elapsed_ms,
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the file parsed
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Decoded header (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: InspectResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Header fields and derived values of an inspected file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Inspected file path
    pub path: String,
    /// File size in bytes
    pub file_size: usize,
    /// AudioFormat tag (1 = PCM)
    pub audio_format: u16,
    /// Channel count
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bytes per second
    pub byte_rate: u32,
    /// Bytes per frame
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Data payload size in bytes
    pub data_size: u32,
    /// Number of frames
    pub num_frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Whether the derived header fields agree
    pub consistent: bool,
    /// BLAKE3 hash of the data payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

impl InspectResult {
    /// Builds a record from a parsed header.
    pub fn new(
        path: impl Into<String>,
        file_size: usize,
        header: &WavHeader,
        pcm_hash: Option<String>,
    ) -> Self {
        Self {
            path: path.into(),
            file_size,
            audio_format: header.audio_format,
            channels: header.channels,
            sample_rate: header.sample_rate,
            byte_rate: header.byte_rate,
            block_align: header.block_align,
            bits_per_sample: header.bits_per_sample,
            data_size: header.data_size,
            num_frames: header.num_frames(),
            duration_seconds: header.duration_seconds(),
            consistent: header.is_consistent(),
            pcm_hash,
        }
    }
}

/// Prints a record as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_from_synth_keeps_field() {
        let err = SynthError::invalid_config("sample_rate", "must be greater than zero");
        let json = JsonError::from_synth(&err);
        assert_eq!(json.code, "TONE_001");
        assert_eq!(json.field.as_deref(), Some("sample_rate"));
    }

    #[test]
    fn test_failure_omits_result() {
        let error = JsonError::new(error_codes::FILE_WRITE, "disk full");
        let output = GenerateOutput::failure(vec![error]);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("result").is_none());
        assert_eq!(value["errors"][0]["code"], "CLI_002");
        assert!(value["errors"][0].get("field").is_none());
    }
}
