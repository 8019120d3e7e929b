//! WAVE encoder builder pattern.

use std::io::Write;

use crate::error::SynthResult;

use super::format::WavFormat;
use super::result::WaveFile;
use super::writer::{encode_with_format, write_wav};

/// Reusable encoder bound to one format.
#[derive(Debug, Clone, Copy)]
pub struct WavEncoder {
    format: WavFormat,
}

impl WavEncoder {
    /// Creates a 16-bit mono encoder.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// Creates an encoder for an explicit format.
    pub fn with_format(format: WavFormat) -> Self {
        Self { format }
    }

    /// Sets the channel count each sample is replicated to.
    pub fn channels(mut self, channels: u16) -> Self {
        self.format.channels = channels;
        self
    }

    /// Format this encoder writes.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Encodes samples to an in-memory WAVE file.
    pub fn encode(&self, samples: &[i16]) -> SynthResult<WaveFile> {
        encode_with_format(samples, &self.format)
    }

    /// Streams samples as a WAVE file to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, samples: &[i16]) -> SynthResult<()> {
        write_wav(writer, &self.format, samples)
    }
}
