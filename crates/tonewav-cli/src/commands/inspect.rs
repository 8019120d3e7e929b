//! Inspect command implementation
//!
//! Reads a WAVE file, decodes its 44-byte header and reports the fields
//! together with the sizes derived from them.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tonewav_synth::wav::compute_pcm_hash;
use tonewav_synth::WavHeader;

use super::json_output::{error_codes, print_json, InspectOutput, InspectResult, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAVE file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 unreadable or malformed file
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let bytes = match std::fs::read(Path::new(input)) {
        Ok(bytes) => bytes,
        Err(e) => {
            let error =
                JsonError::new(error_codes::FILE_READ, format!("failed to read file: {}", e))
                    .with_file(input);
            return Ok(report(json_output, error));
        }
    };

    let header = match WavHeader::parse(&bytes) {
        Ok(header) => header,
        Err(e) => return Ok(report(json_output, JsonError::from_synth(&e).with_file(input))),
    };

    let result = InspectResult::new(input, bytes.len(), &header, compute_pcm_hash(&bytes));

    if json_output {
        print_json(&InspectOutput::success(result))?;
    } else {
        print_human(&result);
    }
    Ok(ExitCode::SUCCESS)
}

fn report(json_output: bool, error: JsonError) -> ExitCode {
    if json_output {
        if let Err(e) = print_json(&InspectOutput::failure(vec![error])) {
            eprintln!("{} {}", "error:".red().bold(), e);
        }
    } else {
        eprintln!("{} [{}] {}", "error:".red().bold(), error.code, error.message);
    }
    ExitCode::from(1)
}

fn print_human(result: &InspectResult) {
    println!("{} {}", "File:".cyan().bold(), result.path);
    println!("  {:<16} {} bytes", "size", result.file_size);
    println!("  {:<16} {}", "format", result.audio_format);
    println!("  {:<16} {}", "channels", result.channels);
    println!("  {:<16} {} Hz", "sample rate", result.sample_rate);
    println!("  {:<16} {}", "bits/sample", result.bits_per_sample);
    println!("  {:<16} {}", "block align", result.block_align);
    println!("  {:<16} {}", "byte rate", result.byte_rate);
    println!("  {:<16} {} bytes", "data", result.data_size);
    println!(
        "  {:<16} {} ({:.3}s)",
        "frames",
        result.num_frames,
        result.duration_seconds
    );
    if let Some(hash) = &result.pcm_hash {
        println!("  {:<16} {}", "pcm hash", hash.as_str().dimmed());
    }

    if result.consistent {
        println!("{}", "Header is consistent".green());
    } else {
        println!(
            "{}",
            "Header fields disagree (block align, byte rate or RIFF size)".yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonewav_synth::{render, SynthConfig};

    #[test]
    fn inspect_accepts_rendered_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tone.wav");
        let wave = render(&SynthConfig::new(8000, 440.0, 80)).unwrap();
        std::fs::write(&path, wave.as_bytes()).unwrap();

        let input = path.to_str().unwrap();
        assert_eq!(run(input, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(input, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn inspect_rejects_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.wav");
        assert_eq!(run(path.to_str().unwrap(), true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn inspect_rejects_garbage() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("junk.wav");
        std::fs::write(&path, b"definitely not a wave file, just some text bytes here").unwrap();
        assert_eq!(run(path.to_str().unwrap(), false).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn inspect_result_reports_derived_fields() {
        let wave = render(&SynthConfig::new(8000, 440.0, 80).with_channel_count(2)).unwrap();
        let header = WavHeader::parse(wave.as_bytes()).unwrap();
        let pcm_hash = compute_pcm_hash(wave.as_bytes());
        let result = InspectResult::new("x.wav", wave.len(), &header, pcm_hash);

        assert_eq!(result.num_frames, 80);
        assert_eq!(result.block_align, 4);
        assert_eq!(result.data_size, 320);
        assert!(result.consistent);
        assert_eq!(result.pcm_hash.as_deref(), Some(wave.pcm_hash()));
    }
}
