//! WAVE format parameters and the quantities derived from them.

use crate::error::{SynthError, SynthResult};

/// Length of the canonical header (RIFF + fmt + data chunk headers).
pub const HEADER_LEN: usize = 44;

/// RIFF ChunkSize minus the data payload: everything after the first 8 bytes.
pub const RIFF_OVERHEAD: u32 = 36;

/// Size of a PCM fmt subchunk body.
pub const FMT_CHUNK_SIZE: u32 = 16;

/// AudioFormat tag for linear PCM.
pub const PCM_FORMAT_TAG: u16 = 1;

/// The only sample width the encoder writes.
pub const SUPPORTED_BIT_DEPTH: u16 = 16;

/// Computes the RIFF ChunkSize field for a payload of `data_size` bytes.
///
/// `data_size` must come from [`WavFormat::data_size`], which guarantees the
/// sum fits.
pub fn riff_chunk_size(data_size: u32) -> u32 {
    RIFF_OVERHEAD.saturating_add(data_size)
}

/// WAVE file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: SUPPORTED_BIT_DEPTH,
        }
    }

    /// Creates and validates a format.
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> SynthResult<Self> {
        let format = Self {
            channels,
            sample_rate,
            bits_per_sample,
        };
        format.validate()?;
        Ok(format)
    }

    /// Checks that the format can be written.
    pub fn validate(&self) -> SynthResult<()> {
        if self.sample_rate == 0 {
            return Err(SynthError::invalid_config(
                "sample_rate",
                "must be greater than zero",
            ));
        }
        if self.bits_per_sample == 0 || self.bits_per_sample % 8 != 0 {
            return Err(SynthError::invalid_config(
                "bit_depth",
                format!(
                    "must be a positive multiple of 8, got {}",
                    self.bits_per_sample
                ),
            ));
        }
        if self.bits_per_sample != SUPPORTED_BIT_DEPTH {
            return Err(SynthError::invalid_config(
                "bit_depth",
                format!(
                    "only {}-bit PCM is supported, got {}",
                    SUPPORTED_BIT_DEPTH, self.bits_per_sample
                ),
            ));
        }
        if self.channels < 1 {
            return Err(SynthError::invalid_config(
                "channel_count",
                "must be at least 1",
            ));
        }
        let block_align = u32::from(self.channels) * u32::from(self.bytes_per_sample());
        if block_align > u32::from(u16::MAX) {
            return Err(SynthError::invalid_config(
                "channel_count",
                format!("{} channels do not fit the BlockAlign field", self.channels),
            ));
        }
        if u64::from(self.sample_rate) * u64::from(block_align) > u64::from(u32::MAX) {
            return Err(SynthError::invalid_config(
                "sample_rate",
                format!("{} Hz does not fit the ByteRate field", self.sample_rate),
            ));
        }
        Ok(())
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels.saturating_mul(self.bytes_per_sample())
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(self.block_align() as u32)
    }

    /// Size in bytes of a data payload holding `frames` sample frames.
    ///
    /// Fails with [`SynthError::ResourceExhausted`] when the payload, or the
    /// RIFF ChunkSize derived from it, does not fit a 32-bit size field.
    pub fn data_size(&self, frames: usize) -> SynthResult<u32> {
        let data_size = frames as u128 * self.block_align() as u128;
        if data_size + RIFF_OVERHEAD as u128 > u32::MAX as u128 {
            return Err(SynthError::ResourceExhausted {
                requested_bytes: data_size + HEADER_LEN as u128,
            });
        }
        Ok(data_size as u32)
    }
}
