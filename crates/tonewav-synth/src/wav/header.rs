//! Reader for the canonical 44-byte WAVE header.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{SynthError, SynthResult};

use super::format::{WavFormat, FMT_CHUNK_SIZE, HEADER_LEN};

/// Fields decoded from the fixed offsets of a canonical WAVE header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF ChunkSize (offset 4).
    pub riff_chunk_size: u32,
    /// AudioFormat tag (offset 20), 1 for PCM.
    pub audio_format: u16,
    /// NumChannels (offset 22).
    pub channels: u16,
    /// SampleRate (offset 24).
    pub sample_rate: u32,
    /// ByteRate (offset 28).
    pub byte_rate: u32,
    /// BlockAlign (offset 32).
    pub block_align: u16,
    /// BitsPerSample (offset 34).
    pub bits_per_sample: u16,
    /// Subchunk2Size (offset 40).
    pub data_size: u32,
}

impl WavHeader {
    /// Parses the header of a canonical WAVE buffer.
    ///
    /// The four ASCII tags must be in place, the fmt subchunk must be the
    /// 16-byte PCM form, and the buffer must hold the whole data payload.
    pub fn parse(bytes: &[u8]) -> SynthResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(SynthError::malformed(format!(
                "buffer is {} bytes, a canonical header needs {}",
                bytes.len(),
                HEADER_LEN
            )));
        }

        let mut cursor = Cursor::new(&bytes[..HEADER_LEN]);

        expect_tag(&mut cursor, b"RIFF")?;
        let riff_chunk_size = cursor.read_u32::<LittleEndian>()?;
        expect_tag(&mut cursor, b"WAVE")?;

        expect_tag(&mut cursor, b"fmt ")?;
        let fmt_size = cursor.read_u32::<LittleEndian>()?;
        if fmt_size != FMT_CHUNK_SIZE {
            return Err(SynthError::malformed(format!(
                "fmt subchunk is {} bytes, expected {}",
                fmt_size, FMT_CHUNK_SIZE
            )));
        }
        let audio_format = cursor.read_u16::<LittleEndian>()?;
        let channels = cursor.read_u16::<LittleEndian>()?;
        let sample_rate = cursor.read_u32::<LittleEndian>()?;
        let byte_rate = cursor.read_u32::<LittleEndian>()?;
        let block_align = cursor.read_u16::<LittleEndian>()?;
        let bits_per_sample = cursor.read_u16::<LittleEndian>()?;

        expect_tag(&mut cursor, b"data")?;
        let data_size = cursor.read_u32::<LittleEndian>()?;

        let available = bytes.len() - HEADER_LEN;
        if data_size as usize > available {
            return Err(SynthError::malformed(format!(
                "data subchunk declares {} bytes but only {} follow the header",
                data_size, available
            )));
        }

        Ok(Self {
            riff_chunk_size,
            audio_format,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            data_size,
        })
    }

    /// Format parameters carried by the header.
    pub fn format(&self) -> WavFormat {
        WavFormat {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
        }
    }

    /// Number of complete sample frames in the payload.
    pub fn num_frames(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        (self.data_size / self.block_align as u32) as usize
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Whether the derived fields agree with each other.
    pub fn is_consistent(&self) -> bool {
        let format = self.format();
        self.riff_chunk_size == super::format::riff_chunk_size(self.data_size)
            && self.block_align == format.block_align()
            && self.byte_rate == format.byte_rate()
    }
}

fn expect_tag(cursor: &mut Cursor<&[u8]>, tag: &[u8; 4]) -> SynthResult<()> {
    let offset = cursor.position();
    let mut found = [0u8; 4];
    cursor.read_exact(&mut found)?;
    if &found != tag {
        return Err(SynthError::malformed(format!(
            "expected {:?} at offset {}, found {:?}",
            String::from_utf8_lossy(tag),
            offset,
            String::from_utf8_lossy(&found)
        )));
    }
    Ok(())
}
