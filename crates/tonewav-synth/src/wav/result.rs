//! Encoded WAVE file type.

use super::format::{WavFormat, HEADER_LEN};

/// A complete, self-contained WAVE file produced by the encoder.
///
/// The bytes are never mutated after construction. Callers take ownership
/// with [`WaveFile::into_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveFile {
    bytes: Vec<u8>,
    format: WavFormat,
    num_frames: usize,
    pcm_hash: String,
}

impl WaveFile {
    pub(crate) fn new(
        bytes: Vec<u8>,
        format: WavFormat,
        num_frames: usize,
        pcm_hash: String,
    ) -> Self {
        Self {
            bytes,
            format,
            num_frames,
            pcm_hash,
        }
    }

    /// Complete file bytes, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the file and returns its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The data payload (everything after the 44-byte header).
    pub fn pcm_data(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Format written into the header.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Number of sample frames in the payload.
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// BLAKE3 hash of the data payload only, as 64 hex characters.
    pub fn pcm_hash(&self) -> &str {
        &self.pcm_hash
    }

    /// Total file length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: a WAVE file holds at least its header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.format.sample_rate as f64
    }
}

impl AsRef<[u8]> for WaveFile {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<WaveFile> for Vec<u8> {
    fn from(wave: WaveFile) -> Self {
        wave.bytes
    }
}
