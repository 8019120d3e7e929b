//! Data payload lookup and hashing.

use byteorder::{ByteOrder, LittleEndian};

/// Iterator over the `(id, body)` chunks that follow a RIFF/WAVE header.
///
/// Stops at the first chunk whose header or body runs past the buffer.
struct Chunks<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.bytes.get(self.pos..self.pos.checked_add(8)?)?;
        let size = LittleEndian::read_u32(&header[4..8]) as usize;

        let body_start = self.pos + 8;
        let body = self.bytes.get(body_start..body_start.checked_add(size)?)?;

        // Odd-sized bodies carry one pad byte
        self.pos = body_start + size + (size & 1);
        Some((&header[0..4], body))
    }
}

/// Returns the payload of the first `data` chunk in a WAVE buffer.
///
/// Chunks are walked from offset 12, so files with extra chunks before
/// `data` (e.g. `LIST`) are handled too. Returns `None` for anything that is
/// not RIFF/WAVE or has no complete `data` chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.get(0..4)? != b"RIFF" || wav_data.get(8..12)? != b"WAVE" {
        return None;
    }

    Chunks {
        bytes: wav_data,
        pos: 12,
    }
    .find(|(id, _)| *id == b"data")
    .map(|(_, body)| body)
}

/// BLAKE3 hex digest of the data payload, ignoring the header.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
