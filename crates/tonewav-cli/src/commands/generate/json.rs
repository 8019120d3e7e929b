//! JSON output mode for the generate command.

use anyhow::Result;
use std::process::ExitCode;
use std::time::Instant;
use tonewav_synth::render;

use super::{exit_code_for, GenerateOptions};
use crate::commands::json_output::{
    error_codes, print_json, GenerateOutput, GenerateResult, JsonError,
};
use crate::input::load_config;

/// Run generate with machine-readable JSON output.
pub fn run_json(options: &GenerateOptions) -> Result<ExitCode> {
    let start = Instant::now();

    let config = match load_config(options.config_path.as_deref(), &options.overrides) {
        Ok(config) => config,
        Err(e) => {
            let mut error = JsonError::from_synth(&e);
            if let Some(path) = &options.config_path {
                error = error.with_file(path.display().to_string());
            }
            print_json(&GenerateOutput::failure(vec![error]))?;
            return Ok(ExitCode::from(1));
        }
    };

    let wave = match render(&config) {
        Ok(wave) => wave,
        Err(e) => {
            print_json(&GenerateOutput::failure(vec![JsonError::from_synth(&e)]))?;
            return Ok(exit_code_for(&e));
        }
    };

    if let Err(e) = options.target.deliver(&wave) {
        let error = JsonError::new(error_codes::FILE_WRITE, e.to_string())
            .with_file(options.target.display());
        print_json(&GenerateOutput::failure(vec![error]))?;
        return Ok(ExitCode::from(2));
    }

    let result = GenerateResult::new(
        options.target.display(),
        config,
        &wave,
        start.elapsed().as_millis() as u64,
    );
    print_json(&GenerateOutput::success(result))?;
    Ok(ExitCode::SUCCESS)
}
