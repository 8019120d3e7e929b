//! Waveform generator.
//!
//! Turns a [`SynthConfig`] into a [`SampleBuffer`] holding a quantized sine
//! tone. The output depends only on the config, so repeated calls produce
//! bit-identical samples.

use log::debug;

use crate::buffer::SampleBuffer;
use crate::config::SynthConfig;
use crate::error::{SynthError, SynthResult};
use crate::oscillator;

/// Generates `config.duration_samples` samples of a sine tone.
///
/// # Arguments
/// * `config` - Validated before any sample is computed
///
/// # Returns
/// One 16-bit sample per time step, or an error if the config is invalid or
/// the sample storage cannot be reserved
pub fn generate(config: &SynthConfig) -> SynthResult<SampleBuffer> {
    config.validate()?;

    let num_samples = config.duration_samples;
    let mut samples: Vec<i16> = Vec::new();
    samples
        .try_reserve_exact(num_samples)
        .map_err(|_| SynthError::ResourceExhausted {
            requested_bytes: num_samples as u128 * std::mem::size_of::<i16>() as u128,
        })?;

    let sample_rate = config.sample_rate as f64;
    for i in 0..num_samples {
        let phase = oscillator::phase_at(config.frequency, sample_rate, i);
        samples.push(oscillator::quantize_i16(oscillator::sine(phase)));
    }

    debug!(
        "generated {} samples of {} Hz at {} Hz",
        num_samples, config.frequency, config.sample_rate
    );

    Ok(SampleBuffer::from_vec(samples))
}
