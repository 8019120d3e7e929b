//! Property-based tests for tonewav using proptest.
//!
//! These tests check the size, range and round-trip laws of rendered files
//! over arbitrary valid configs, and that the readers never panic on
//! arbitrary input.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tonewav-tests --test proptest_invariants
//! ```

use proptest::prelude::*;

use tonewav_synth::oscillator::round_to_i16;
use tonewav_synth::{generate, render, SynthConfig, WavHeader};
use tonewav_tests::{check_canonical_layout, decode_with_hound};

/// Strategy for configs that must render successfully.
fn valid_config() -> impl Strategy<Value = SynthConfig> {
    (1_000u32..=192_000, 0usize..2_000, 1u16..=8)
        .prop_flat_map(|(rate, samples, channels)| {
            let nyquist = f64::from(rate) / 2.0;
            (0.1f64..nyquist).prop_map(move |freq| {
                SynthConfig::new(rate, freq, samples).with_channel_count(channels)
            })
        })
}

// ============================================================================
// 1. Rendered File Laws
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// File length is header plus frames times block align.
    #[test]
    fn file_length_matches_config(config in valid_config()) {
        let wave = render(&config).unwrap();
        let expected = 44 + config.duration_samples * usize::from(config.channel_count) * 2;
        prop_assert_eq!(wave.len(), expected);
        prop_assert_eq!(wave.num_frames(), config.duration_samples);
    }

    /// Every rendered file passes the strict layout check.
    #[test]
    fn rendered_files_are_canonical(config in valid_config()) {
        let wave = render(&config).unwrap();
        let layout = check_canonical_layout(wave.as_bytes());
        prop_assert!(layout.is_ok(), "{:?}", layout);
    }

    /// Parsing the header gives back the config's format.
    #[test]
    fn header_round_trips(config in valid_config()) {
        let wave = render(&config).unwrap();
        let header = WavHeader::parse(wave.as_bytes()).unwrap();
        prop_assert_eq!(header.sample_rate, config.sample_rate);
        prop_assert_eq!(header.channels, config.channel_count);
        prop_assert_eq!(header.bits_per_sample, 16);
        prop_assert_eq!(header.num_frames(), config.duration_samples);
        prop_assert!(header.is_consistent());
    }

    /// A unit-amplitude sine never reaches -32768.
    #[test]
    fn samples_stay_in_symmetric_range(config in valid_config()) {
        let samples = generate(&config).unwrap();
        prop_assert_eq!(samples.len(), config.duration_samples);
        prop_assert!(samples.iter().all(|&s| (-32_767..=32_767).contains(&s)));
        if let Some(&first) = samples.first() {
            prop_assert_eq!(first, 0);
        }
    }

    /// hound decodes exactly the generated samples, once per channel.
    #[test]
    fn hound_decodes_generated_samples(config in valid_config()) {
        let wave = render(&config).unwrap();
        let (spec, decoded) = decode_with_hound(wave.as_bytes()).unwrap();
        prop_assert_eq!(spec.channels, config.channel_count);

        let channels = usize::from(config.channel_count);
        let expected: Vec<i16> = generate(&config)
            .unwrap()
            .iter()
            .flat_map(|&s| std::iter::repeat(s).take(channels))
            .collect();
        prop_assert_eq!(decoded, expected);
    }
}

// ============================================================================
// 2. Robustness
// ============================================================================

proptest! {
    /// Quantization is total: any input lands in range without panicking.
    #[test]
    fn round_to_i16_is_total(x in prop::num::f64::ANY) {
        let q = round_to_i16(x);
        if x.is_finite() && x.abs() < 32_767.0 {
            prop_assert_eq!(i32::from(q), x.round() as i32);
        }
    }

    /// Values past the range clamp to the nearest bound.
    #[test]
    fn round_to_i16_clamps(x in 32_768.0f64..1e12) {
        prop_assert_eq!(round_to_i16(x), i16::MAX);
        prop_assert_eq!(round_to_i16(-x), i16::MIN);
    }

    /// The header reader never panics on arbitrary bytes.
    #[test]
    fn header_parse_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let _ = WavHeader::parse(&bytes);
    }

    /// A header that parses never promises more data than the buffer holds.
    #[test]
    fn parsed_data_size_fits(mut bytes in prop::collection::vec(any::<u8>(), 44..200)) {
        bytes[0..4].copy_from_slice(b"RIFF");
        bytes[8..16].copy_from_slice(b"WAVEfmt ");
        bytes[16..20].copy_from_slice(&16u32.to_le_bytes());
        bytes[36..40].copy_from_slice(b"data");
        if let Ok(header) = WavHeader::parse(&bytes) {
            prop_assert!(44 + header.data_size as usize <= bytes.len());
        }
    }

    /// Config parsing never panics on arbitrary text.
    #[test]
    fn config_json_never_panics(s in "\\PC{0,200}") {
        let _ = SynthConfig::from_json(&s);
    }
}
