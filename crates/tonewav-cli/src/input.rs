//! Config loading for CLI commands.
//!
//! A render config is assembled in three layers: built-in defaults, an
//! optional JSON config file, then individual command-line flags. Validation
//! runs once, after every layer has been applied.

use std::path::Path;

use tonewav_synth::{SynthConfig, SynthResult};

/// Command-line values that override the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Tone frequency in Hz.
    pub frequency: Option<f64>,
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Duration as a sample count.
    pub samples: Option<usize>,
    /// Duration in seconds (converted with the final sample rate).
    pub seconds: Option<f64>,
    /// Channel count.
    pub channels: Option<u16>,
    /// Bits per sample.
    pub bit_depth: Option<u16>,
}

impl ConfigOverrides {
    /// Applies the overrides on top of `base`.
    ///
    /// The sample rate is applied before a duration in seconds is converted.
    pub fn apply(&self, base: SynthConfig) -> SynthResult<SynthConfig> {
        let mut config = base;
        if let Some(rate) = self.sample_rate {
            config = config.with_sample_rate(rate);
        }
        if let Some(freq) = self.frequency {
            config = config.with_frequency(freq);
        }
        if let Some(channels) = self.channels {
            config = config.with_channel_count(channels);
        }
        if let Some(depth) = self.bit_depth {
            config = config.with_bit_depth(depth);
        }
        if let Some(samples) = self.samples {
            config = config.with_duration_samples(samples);
        }
        if let Some(seconds) = self.seconds {
            config = config.with_duration_seconds(seconds)?;
        }
        Ok(config)
    }
}

/// Builds and validates the render config.
///
/// # Arguments
/// * `config_path` - Optional JSON config file
/// * `overrides` - Flag values applied on top of the file
pub fn load_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> SynthResult<SynthConfig> {
    let base = match config_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            SynthConfig::parse_json(&json)?
        }
        None => SynthConfig::default(),
    };

    let config = overrides.apply(base)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tonewav_synth::SynthError;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let config = load_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, SynthConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.json");
        std::fs::write(&path, r#"{ "frequency": 220.0, "sample_rate": 0 }"#).unwrap();

        let overrides = ConfigOverrides {
            sample_rate: Some(8000),
            ..Default::default()
        };
        let config = load_config(Some(&path), &overrides).unwrap();

        assert_eq!(config.frequency, 220.0);
        assert_eq!(config.sample_rate, 8000);
    }

    #[test]
    fn test_seconds_use_overridden_sample_rate() {
        let overrides = ConfigOverrides {
            sample_rate: Some(16000),
            seconds: Some(0.5),
            ..Default::default()
        };
        let config = load_config(None, &overrides).unwrap();
        assert_eq!(config.duration_samples, 8000);
    }

    #[test]
    fn test_invalid_result_is_rejected() {
        let overrides = ConfigOverrides {
            frequency: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            load_config(None, &overrides),
            Err(SynthError::InvalidConfiguration {
                field: "frequency",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(
            Some(Path::new("/nonexistent/tone.json")),
            &ConfigOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SynthError::Io(_)));
    }
}
