//! Sine oscillator and sample quantization.

/// 2π.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Phase in radians of sample `index` for a tone of `frequency` Hz.
///
/// Computed directly from the index rather than accumulated, so every sample
/// is independent of rounding drift in the previous ones.
#[inline]
pub fn phase_at(frequency: f64, sample_rate: f64, index: usize) -> f64 {
    TWO_PI * frequency * index as f64 / sample_rate
}

/// Sine amplitude at the given phase.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// Largest positive sample value for a signed integer of `bit_depth` bits.
///
/// `bit_depth` must be in `1..=32`.
pub fn max_amplitude(bit_depth: u16) -> i64 {
    debug_assert!((1..=32).contains(&bit_depth));
    (1i64 << (bit_depth - 1)) - 1
}

/// Quantizes an amplitude in `[-1.0, 1.0]` to a 16-bit sample.
///
/// Rounds half away from zero, then saturates to the `i16` range so an
/// amplitude at or past full scale never wraps.
#[inline]
pub fn quantize_i16(amplitude: f64) -> i16 {
    round_to_i16(amplitude * max_amplitude(16) as f64)
}

/// Rounds an already scaled value to the nearest `i16`, half away from zero,
/// saturating at the type bounds.
#[inline]
pub fn round_to_i16(scaled: f64) -> i16 {
    scaled.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16
}
