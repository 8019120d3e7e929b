//! Error types for tone synthesis and WAVE encoding.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while rendering a tone.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A configuration value is out of range.
    #[error("invalid configuration '{field}': {message}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// Error message.
        message: String,
    },

    /// The output buffer cannot be sized or allocated.
    #[error("cannot allocate {requested_bytes} bytes for WAVE output")]
    ResourceExhausted {
        /// Number of bytes that was requested.
        requested_bytes: u128,
    },

    /// A buffer handed to the header reader is not a canonical WAVE file.
    #[error("malformed WAVE data: {message}")]
    MalformedWave {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            message: message.into(),
        }
    }

    /// Creates a malformed WAVE error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedWave {
            message: message.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidConfiguration { .. } => "TONE_001",
            SynthError::ResourceExhausted { .. } => "TONE_002",
            SynthError::MalformedWave { .. } => "TONE_003",
            SynthError::Io(_) => "TONE_004",
        }
    }

    /// Error category used to group related errors.
    pub fn category(&self) -> &'static str {
        "synth"
    }

    /// Whether the error was caused by caller input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SynthError::InvalidConfiguration { .. } | SynthError::MalformedWave { .. }
        )
    }
}
