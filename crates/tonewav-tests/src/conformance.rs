//! Independent checks of the canonical 44-byte WAVE layout.
//!
//! These readers do not share code with `tonewav_synth::wav`. Offsets are
//! fixed: RIFF at 0, `fmt ` at 12, `data` at 36, payload from 44.

use std::fmt;
use std::io::Cursor;

/// Fields read from a canonical header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalLayout {
    /// RIFF chunk size at offset 4.
    pub riff_chunk_size: u32,
    /// AudioFormat tag.
    pub audio_format: u16,
    /// Channel count.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Payload size from the data chunk header.
    pub data_size: u32,
}

/// A violation of the canonical layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutError {
    /// Byte offset of the offending field.
    pub offset: usize,
    /// Description of what went wrong.
    pub message: String,
}

impl LayoutError {
    fn at(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout error at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for LayoutError {}

fn u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Checks every fixed field of a canonical 16-bit PCM file.
///
/// Beyond the tags, this requires the derived fields to agree with each
/// other and the file length to be exactly `44 + data_size`.
pub fn check_canonical_layout(data: &[u8]) -> Result<CanonicalLayout, LayoutError> {
    if data.len() < 44 {
        return Err(LayoutError::at(
            0,
            format!("file is {} bytes, header needs 44", data.len()),
        ));
    }

    for (offset, tag) in [(0usize, b"RIFF"), (8, b"WAVE"), (12, b"fmt "), (36, b"data")] {
        if &data[offset..offset + 4] != tag {
            return Err(LayoutError::at(
                offset,
                format!("expected {:?}", String::from_utf8_lossy(tag)),
            ));
        }
    }

    if u32_at(data, 16) != 16 {
        return Err(LayoutError::at(16, "fmt chunk size must be 16"));
    }

    let layout = CanonicalLayout {
        riff_chunk_size: u32_at(data, 4),
        audio_format: u16_at(data, 20),
        channels: u16_at(data, 22),
        sample_rate: u32_at(data, 24),
        byte_rate: u32_at(data, 28),
        block_align: u16_at(data, 32),
        bits_per_sample: u16_at(data, 34),
        data_size: u32_at(data, 40),
    };

    if layout.audio_format != 1 {
        return Err(LayoutError::at(20, "audio format must be PCM (1)"));
    }
    if layout.bits_per_sample != 16 {
        return Err(LayoutError::at(34, "bits per sample must be 16"));
    }

    let block_align = u32::from(layout.channels) * u32::from(layout.bits_per_sample) / 8;
    if u32::from(layout.block_align) != block_align {
        return Err(LayoutError::at(32, format!("block align should be {}", block_align)));
    }
    if u64::from(layout.byte_rate) != u64::from(layout.sample_rate) * u64::from(block_align) {
        return Err(LayoutError::at(28, "byte rate does not match sample rate x block align"));
    }
    if u64::from(layout.riff_chunk_size) != 36 + u64::from(layout.data_size) {
        return Err(LayoutError::at(4, "RIFF size should be 36 + data size"));
    }
    if data.len() as u64 != 44 + u64::from(layout.data_size) {
        return Err(LayoutError::at(
            40,
            format!(
                "file is {} bytes, header promises {}",
                data.len(),
                44 + u64::from(layout.data_size)
            ),
        ));
    }

    Ok(layout)
}

/// Decodes a WAVE buffer with `hound` and returns its `WavSpec` and samples.
pub fn decode_with_hound(data: &[u8]) -> Result<(hound::WavSpec, Vec<i16>), hound::Error> {
    let mut reader = hound::WavReader::new(Cursor::new(data))?;
    let spec = reader.spec();
    let samples = reader.samples::<i16>().collect::<Result<Vec<_>, _>>()?;
    Ok((spec, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonewav_synth::{render, SynthConfig};

    #[test]
    fn test_rendered_file_is_canonical() {
        let wave = render(&SynthConfig::new(22050, 440.0, 300)).unwrap();
        let layout = check_canonical_layout(wave.as_bytes()).unwrap();

        assert_eq!(layout.channels, 1);
        assert_eq!(layout.sample_rate, 22050);
        assert_eq!(layout.byte_rate, 44100);
        assert_eq!(layout.block_align, 2);
        assert_eq!(layout.data_size, 600);
        assert_eq!(layout.riff_chunk_size, 636);
    }

    #[test]
    fn test_trailing_bytes_are_rejected() {
        let mut bytes = render(&SynthConfig::new(8000, 440.0, 10)).unwrap().into_bytes();
        bytes.push(0);
        let err = check_canonical_layout(&bytes).unwrap_err();
        assert_eq!(err.offset, 40);
    }

    #[test]
    fn test_bad_byte_rate_is_rejected() {
        let mut bytes = render(&SynthConfig::new(8000, 440.0, 10)).unwrap().into_bytes();
        bytes[28..32].copy_from_slice(&1u32.to_le_bytes());
        let err = check_canonical_layout(&bytes).unwrap_err();
        assert_eq!(err.offset, 28);
    }

    #[test]
    fn test_wrong_tag_is_rejected() {
        let mut bytes = render(&SynthConfig::new(8000, 440.0, 10)).unwrap().into_bytes();
        bytes[36..40].copy_from_slice(b"LIST");
        let err = check_canonical_layout(&bytes).unwrap_err();
        assert_eq!(err.offset, 36);
        assert!(err.to_string().contains("data"));
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        assert_eq!(check_canonical_layout(&[0u8; 20]).unwrap_err().offset, 0);
    }

    #[test]
    fn test_hound_decodes_rendered_samples() {
        let config = SynthConfig::new(8000, 1000.0, 16);
        let wave = render(&config).unwrap();
        let (spec, samples) = decode_with_hound(wave.as_bytes()).unwrap();

        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
        assert_eq!(samples, tonewav_synth::generate(&config).unwrap().into_vec());
    }
}
