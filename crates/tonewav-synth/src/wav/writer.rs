//! Core WAVE writing and encoding functions.

use std::io::Write;

use log::debug;

use crate::error::{SynthError, SynthResult};

use super::format::{riff_chunk_size, WavFormat, FMT_CHUNK_SIZE, HEADER_LEN, PCM_FORMAT_TAG};
use super::result::WaveFile;

/// Writes a complete WAVE file to a writer.
///
/// Each sample is written once per channel, little-endian, with no padding.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAVE format parameters, validated before anything is written
/// * `samples` - One 16-bit sample per frame
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, samples: &[i16]) -> SynthResult<()> {
    format.validate()?;
    let data_size = format.data_size(samples.len())?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_chunk_size(data_size).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&FMT_CHUNK_SIZE.to_le_bytes())?;
    writer.write_all(&PCM_FORMAT_TAG.to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    write_pcm16(writer, samples, format.channels)?;

    Ok(())
}

/// Writes samples as interleaved 16-bit PCM, repeating each one `channels` times.
fn write_pcm16<W: Write>(writer: &mut W, samples: &[i16], channels: u16) -> std::io::Result<()> {
    if channels == 1 {
        for &sample in samples {
            writer.write_all(&sample.to_le_bytes())?;
        }
        return Ok(());
    }

    for &sample in samples {
        let bytes = sample.to_le_bytes();
        for _ in 0..channels {
            writer.write_all(&bytes)?;
        }
    }
    Ok(())
}

/// Encodes samples into a complete in-memory WAVE file.
///
/// # Arguments
/// * `samples` - One 16-bit sample per frame
/// * `sample_rate` - Sample rate in Hz
/// * `bit_depth` - Bits per sample, must be 16
/// * `channel_count` - Channels each sample is written to
///
/// # Returns
/// The WAVE file, or `InvalidConfiguration` / `ResourceExhausted`. No partial
/// buffer is ever returned.
pub fn encode(
    samples: &[i16],
    sample_rate: u32,
    bit_depth: u16,
    channel_count: u16,
) -> SynthResult<WaveFile> {
    let format = WavFormat::new(channel_count, sample_rate, bit_depth)?;
    encode_with_format(samples, &format)
}

/// Encodes samples with an existing format.
pub fn encode_with_format(samples: &[i16], format: &WavFormat) -> SynthResult<WaveFile> {
    format.validate()?;
    let data_size = format.data_size(samples.len())?;

    let total_len = HEADER_LEN as u64 + u64::from(data_size);
    let total_len = usize::try_from(total_len).map_err(|_| SynthError::ResourceExhausted {
        requested_bytes: total_len as u128,
    })?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(total_len)
        .map_err(|_| SynthError::ResourceExhausted {
            requested_bytes: total_len as u128,
        })?;
    write_wav(&mut buffer, format, samples)?;
    debug_assert_eq!(buffer.len(), total_len);

    let pcm_hash = blake3::hash(&buffer[HEADER_LEN..]).to_hex().to_string();
    debug!(
        "encoded {} frames ({} data bytes, {} channel(s) at {} Hz)",
        samples.len(),
        data_size,
        format.channels,
        format.sample_rate
    );

    Ok(WaveFile::new(buffer, *format, samples.len(), pcm_hash))
}
