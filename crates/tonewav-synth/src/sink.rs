//! Consumers of finished WAVE files.
//!
//! The encoder stops at an in-memory buffer. Whatever happens next (writing
//! to disk, piping to a player, sending over a socket) goes through a
//! [`WaveSink`].

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::SynthResult;
use crate::wav::WaveFile;

/// Something that accepts a complete WAVE file.
pub trait WaveSink {
    /// Hands a finished file to the sink.
    fn accept(&mut self, wave: &WaveFile) -> SynthResult<()>;
}

/// Writes each accepted file to a fixed path, creating parent directories.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink that writes to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WaveSink for FileSink {
    fn accept(&mut self, wave: &WaveFile) -> SynthResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, wave.as_bytes())?;
        debug!("wrote {} bytes to {}", wave.len(), self.path.display());
        Ok(())
    }
}

/// Streams accepted files to any writer and flushes after each one.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WaveSink for WriterSink<W> {
    fn accept(&mut self, wave: &WaveFile) -> SynthResult<()> {
        self.writer.write_all(wave.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps a copy of the most recently accepted file.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    last: Option<WaveFile>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last accepted file, if any.
    pub fn last(&self) -> Option<&WaveFile> {
        self.last.as_ref()
    }

    /// Takes the last accepted file out of the sink.
    pub fn take(&mut self) -> Option<WaveFile> {
        self.last.take()
    }
}

impl WaveSink for MemorySink {
    fn accept(&mut self, wave: &WaveFile) -> SynthResult<()> {
        self.last = Some(wave.clone());
        Ok(())
    }
}
