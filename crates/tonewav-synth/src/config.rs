//! Tone rendering configuration.
//!
//! A [`SynthConfig`] carries everything the generator and the encoder need:
//! sample rate, bit depth, tone frequency, duration in samples and channel
//! count. Configs can be built in code or loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::wav::WavFormat;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default bit depth.
pub const DEFAULT_BIT_DEPTH: u16 = 16;

/// Default tone frequency in Hz (concert A).
pub const DEFAULT_FREQUENCY: f64 = 440.0;

/// Configuration for rendering a single sine tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample. Only 16 is supported.
    pub bit_depth: u16,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Number of samples (frames) to render.
    pub duration_samples: usize,
    /// Number of channels each sample is written to.
    pub channel_count: u16,
}

impl Default for SynthConfig {
    /// One second of a 440 Hz tone at 44.1 kHz, 16-bit mono.
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            bit_depth: DEFAULT_BIT_DEPTH,
            frequency: DEFAULT_FREQUENCY,
            duration_samples: DEFAULT_SAMPLE_RATE as usize,
            channel_count: 1,
        }
    }
}

impl SynthConfig {
    /// Creates a 16-bit mono config.
    pub fn new(sample_rate: u32, frequency: f64, duration_samples: usize) -> Self {
        Self {
            sample_rate,
            frequency,
            duration_samples,
            ..Self::default()
        }
    }

    /// Parses and validates a config from JSON.
    ///
    /// Missing keys take their default value. Parse failures, including
    /// negative values for unsigned fields, are reported as invalid
    /// configuration.
    pub fn from_json(json: &str) -> SynthResult<Self> {
        let config = Self::parse_json(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a config from JSON without validating it, so callers can apply
    /// overrides first.
    pub fn parse_json(json: &str) -> SynthResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SynthError::invalid_config("config", e.to_string()))
    }

    /// Reads and validates a JSON config file.
    pub fn from_file(path: &Path) -> SynthResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SynthResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SynthError::invalid_config("config", e.to_string()))
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the tone frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the bit depth.
    pub fn with_bit_depth(mut self, bit_depth: u16) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// Sets the number of channels.
    pub fn with_channel_count(mut self, channel_count: u16) -> Self {
        self.channel_count = channel_count;
        self
    }

    /// Sets the duration as a sample count.
    pub fn with_duration_samples(mut self, duration_samples: usize) -> Self {
        self.duration_samples = duration_samples;
        self
    }

    /// Sets the duration in seconds, rounded to the nearest whole sample at
    /// the current sample rate.
    pub fn with_duration_seconds(mut self, seconds: f64) -> SynthResult<Self> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SynthError::invalid_config(
                "duration_seconds",
                format!("must be a finite, non-negative number, got {}", seconds),
            ));
        }
        let samples = (seconds * self.sample_rate as f64).round();
        if samples >= usize::MAX as f64 {
            return Err(SynthError::invalid_config(
                "duration_seconds",
                format!("{} seconds is too long to represent", seconds),
            ));
        }
        self.duration_samples = samples as usize;
        Ok(self)
    }

    /// Checks every field. Nothing is clamped.
    pub fn validate(&self) -> SynthResult<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(SynthError::invalid_config(
                "frequency",
                format!(
                    "must be a positive, finite number of Hz, got {}",
                    self.frequency
                ),
            ));
        }
        self.format().validate()
    }

    /// WAVE format described by this config.
    pub fn format(&self) -> WavFormat {
        WavFormat {
            channels: self.channel_count,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bit_depth,
        }
    }

    /// Bytes per frame.
    pub fn block_align(&self) -> u16 {
        self.format().block_align()
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.format().byte_rate()
    }

    /// Size of the data payload in bytes.
    pub fn data_size(&self) -> SynthResult<u32> {
        self.format().data_size(self.duration_samples)
    }

    /// Value of the RIFF ChunkSize field.
    pub fn riff_chunk_size(&self) -> SynthResult<u32> {
        Ok(crate::wav::riff_chunk_size(self.data_size()?))
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.duration_samples as f64 / self.sample_rate as f64
    }
}
