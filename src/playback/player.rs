use crate::{Error, Result};
use rodio::{Decoder, OutputStream, Sink, Source};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Something that can play an audio file to completion.
///
/// `play` blocks the calling thread until playback has finished and every
/// device handle it opened has been released.
pub trait Player: Send + Sync {
    fn play(&self, path: &Path) -> Result<()>;
}

/// Plays through the system's default output device.
#[derive(Debug, Default, Clone, Copy)]
pub struct RodioPlayer;

impl RodioPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RodioPlayer {
    fn play(&self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| Error::Audio(format!("Failed to decode audio: {}", e)))?;
        debug!(
            sample_rate = source.sample_rate(),
            channels = source.channels(),
            "audio decoded"
        );

        // Stream and sink are dropped on every return path below.
        let (_stream, handle) = OutputStream::try_default()
            .map_err(|e| Error::Audio(format!("Failed to open output device: {}", e)))?;
        let sink = Sink::try_new(&handle)
            .map_err(|e| Error::Audio(format!("Failed to start playback: {}", e)))?;

        info!(path = %path.display(), "playing forecast");
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }
}

/// Saves the audio to a file instead of playing it.
#[derive(Debug, Clone)]
pub struct FileSink {
    dest: PathBuf,
}

impl FileSink {
    pub fn new(dest: impl Into<PathBuf>) -> Self {
        Self { dest: dest.into() }
    }
}

impl Player for FileSink {
    fn play(&self, path: &Path) -> Result<()> {
        let bytes = fs::copy(path, &self.dest)?;
        info!(path = %self.dest.display(), bytes, "audio saved");
        Ok(())
    }
}
