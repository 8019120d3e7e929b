//! Render pipeline: config in, WAVE file out.

use log::debug;

use crate::config::SynthConfig;
use crate::error::SynthResult;
use crate::generate::generate;
use crate::sink::WaveSink;
use crate::wav::{encode_with_format, WaveFile};

/// Renders a config to a complete WAVE file.
///
/// The config is validated and the output size checked before any sample is
/// computed, so an oversized request fails without allocating.
pub fn render(config: &SynthConfig) -> SynthResult<WaveFile> {
    config.validate()?;
    let data_size = config.data_size()?;
    debug!(
        "rendering {} Hz tone: {} samples, {} data bytes, block align {}, byte rate {}",
        config.frequency,
        config.duration_samples,
        data_size,
        config.block_align(),
        config.byte_rate()
    );

    let samples = generate(config)?;
    let wave = encode_with_format(&samples, &config.format())?;

    debug!("rendered {} bytes, pcm hash {}", wave.len(), wave.pcm_hash());
    Ok(wave)
}

/// Renders a config and hands the result to a sink.
pub fn render_to<S: WaveSink + ?Sized>(
    config: &SynthConfig,
    sink: &mut S,
) -> SynthResult<WaveFile> {
    let wave = render(config)?;
    sink.accept(&wave)?;
    Ok(wave)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;
    use crate::sink::MemorySink;
    use crate::wav::WavHeader;

    #[test]
    fn test_render_a4() {
        let wave = render(&SynthConfig::default()).unwrap();
        assert_eq!(wave.len(), 88244);
        assert_eq!(wave.num_frames(), 44100);
        assert_eq!(wave.duration_seconds(), 1.0);
    }

    #[test]
    fn test_render_round_trip() {
        let config = SynthConfig::new(16000, 100.0, 1234).with_channel_count(2);
        let wave = render(&config).unwrap();
        let header = WavHeader::parse(wave.as_bytes()).unwrap();

        assert_eq!(header.sample_rate, config.sample_rate);
        assert_eq!(header.bits_per_sample, config.bit_depth);
        assert_eq!(header.channels, config.channel_count);
        assert_eq!(header.data_size, config.data_size().unwrap());
    }

    #[test]
    fn test_render_rejects_oversized_request() {
        let config = SynthConfig::default().with_duration_samples(usize::MAX);
        assert!(matches!(
            render(&config),
            Err(SynthError::ResourceExhausted { .. })
        ));
    }

    #[test]
    fn test_render_to_sink() {
        let mut sink = MemorySink::new();
        let config = SynthConfig::new(8000, 500.0, 80);
        let wave = render_to(&config, &mut sink).unwrap();
        assert_eq!(sink.last(), Some(&wave));
    }

    #[test]
    fn test_invalid_config_reaches_no_sink() {
        let mut sink = MemorySink::new();
        let config = SynthConfig::default().with_sample_rate(0);
        assert!(render_to(&config, &mut sink).is_err());
        assert!(sink.last().is_none());
    }
}
