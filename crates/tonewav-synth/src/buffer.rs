//! Quantized sample storage produced by the generator.

use std::ops::Deref;

/// An immutable sequence of signed 16-bit samples, one per time step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleBuffer {
    samples: Vec<i16>,
}

impl SampleBuffer {
    /// Wraps already quantized samples.
    pub fn from_vec(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Returns the samples as a slice.
    pub fn as_slice(&self) -> &[i16] {
        &self.samples
    }

    /// Consumes the buffer and returns the underlying samples.
    pub fn into_vec(self) -> Vec<i16> {
        self.samples
    }

    /// Largest absolute sample value, or 0 for an empty buffer.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

impl Deref for SampleBuffer {
    type Target = [i16];

    fn deref(&self) -> &[i16] {
        &self.samples
    }
}

impl AsRef<[i16]> for SampleBuffer {
    fn as_ref(&self) -> &[i16] {
        &self.samples
    }
}

impl From<SampleBuffer> for Vec<i16> {
    fn from(buffer: SampleBuffer) -> Self {
        buffer.samples
    }
}
