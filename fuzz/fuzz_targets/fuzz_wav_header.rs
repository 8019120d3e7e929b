#![no_main]

use libfuzzer_sys::fuzz_target;
use tonewav_synth::wav::{compute_pcm_hash, WavHeader};

fuzz_target!(|data: &[u8]| {
    if let Ok(header) = WavHeader::parse(data) {
        assert!(44 + header.data_size as usize <= data.len());
        let _ = header.num_frames();
        let _ = header.duration_seconds();
        let _ = header.is_consistent();
    }
    let _ = compute_pcm_hash(data);
});
