#![no_main]

use libfuzzer_sys::fuzz_target;
use tonewav_synth::{render, SynthConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = SynthConfig::from_json(text) else {
        return;
    };

    // Keep renders small
    if config.duration_samples > 1 << 16 || config.channel_count > 16 {
        return;
    }
    if let Ok(wave) = render(&config) {
        assert_eq!(wave.len(), 44 + wave.pcm_data().len());
        assert!(wave.pcm_data().len() % usize::from(config.block_align()) == 0);
    }
});
