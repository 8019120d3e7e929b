//! tonewav synthesis core
//!
//! This crate renders a sine tone to a canonical 16-bit PCM WAVE file held in
//! memory.
//!
//! # Overview
//!
//! Rendering is two pure steps:
//!
//! - **Generate** - compute a quantized sine signal from a [`SynthConfig`]
//! - **Encode** - wrap the samples in a 44-byte RIFF/WAVE header
//!
//! The finished [`WaveFile`] belongs to the caller. Writing it somewhere is
//! the job of a [`WaveSink`].
//!
//! # Determinism
//!
//! Output depends only on the config. The same config always produces the
//! same bytes, and the BLAKE3 hash of the data payload
//! ([`WaveFile::pcm_hash`]) can be used to compare renders.
//!
//! # Example
//!
//! ```
//! use tonewav_synth::{render, SynthConfig, WavHeader};
//!
//! let config = SynthConfig::default().with_frequency(261.63);
//! let wave = render(&config)?;
//! assert_eq!(wave.len(), 44 + 44100 * 2);
//!
//! let header = WavHeader::parse(wave.as_bytes())?;
//! assert_eq!(header.sample_rate, 44100);
//! # Ok::<(), tonewav_synth::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`config`] - Render configuration and derived sizes
//! - [`generate()`] - Waveform generator
//! - [`oscillator`] - Sine evaluation and quantization
//! - [`wav`] - WAVE encoder and header reader
//! - [`render()`] - Generate + encode pipeline
//! - [`sink`] - Outbound consumers of finished files

pub mod buffer;
pub mod config;
pub mod error;
pub mod generate;
pub mod oscillator;
pub mod render;
pub mod sink;
pub mod wav;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use config::SynthConfig;
pub use error::{SynthError, SynthResult};
pub use generate::generate;
pub use render::{render, render_to};
pub use sink::{FileSink, MemorySink, WaveSink, WriterSink};
pub use wav::{encode, WavEncoder, WavFormat, WavHeader, WaveFile};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let config = SynthConfig::default();
        let samples = generate(&config).expect("generation should succeed");
        let wave = encode(
            &samples,
            config.sample_rate,
            config.bit_depth,
            config.channel_count,
        )
        .expect("encoding should succeed");

        assert_eq!(wave.len(), 88244);
        assert_eq!(&wave.as_bytes()[0..4], b"RIFF");
        assert_eq!(&wave.as_bytes()[8..12], b"WAVE");

        // First sample sits at the start of the payload
        assert_eq!(&wave.as_bytes()[44..46], &[0, 0]);

        // Pipeline and manual steps agree byte for byte
        assert_eq!(render(&config).unwrap(), wave);
    }

    #[test]
    fn test_render_determinism() {
        let config = SynthConfig::new(48000, 997.0, 4800);

        let first = render(&config).expect("first render");
        let second = render(&config).expect("second render");

        assert_eq!(first.pcm_hash(), second.pcm_hash());
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_different_frequencies_produce_different_output() {
        let a = render(&SynthConfig::new(44100, 440.0, 1000)).unwrap();
        let b = render(&SynthConfig::new(44100, 441.0, 1000)).unwrap();
        assert_ne!(a.pcm_hash(), b.pcm_hash());
    }

    #[test]
    fn test_samples_decode_back() {
        let config = SynthConfig::new(8000, 300.0, 200);
        let samples = generate(&config).unwrap();
        let wave = render(&config).unwrap();

        let decoded: Vec<i16> = wave
            .pcm_data()
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        assert_eq!(decoded, samples.into_vec());
    }

    #[test]
    fn test_pcm_hash_format() {
        let wave = render(&SynthConfig::default()).unwrap();

        assert_eq!(wave.pcm_hash().len(), 64);
        assert!(wave.pcm_hash().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
