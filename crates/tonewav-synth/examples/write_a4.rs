//! Renders one second of concert A and writes it to `a4.wav`.

use tonewav_synth::{render_to, FileSink, SynthConfig};

fn main() -> Result<(), tonewav_synth::SynthError> {
    let mut sink = FileSink::new("a4.wav");
    let wave = render_to(&SynthConfig::default(), &mut sink)?;
    println!(
        "wrote {} ({} bytes, pcm hash {})",
        sink.path().display(),
        wave.len(),
        wave.pcm_hash()
    );
    Ok(())
}
