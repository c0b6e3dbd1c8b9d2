use crate::Result;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

/// Name of the on-disk audio file inside its private directory.
pub const AUDIO_FILE_NAME: &str = "weather.mp3";

const SCRATCH_PREFIX: &str = "weather-to-speech-";

/// Audio written to disk for the decoder.
///
/// The file lives in a freshly created directory under the base dir, so
/// concurrent runs never share a path and nothing already in the base dir is
/// opened. The directory is removed when the guard is dropped, whichever way
/// the run ends.
#[derive(Debug)]
pub struct TempAudioFile {
    dir: Option<TempDir>,
    path: PathBuf,
}

impl TempAudioFile {
    /// Write `data` to `<base>/weather-to-speech-XXXX/weather.mp3`, creating `base` if needed.
    pub fn create(base: &Path, data: &[u8]) -> Result<Self> {
        fs::create_dir_all(base)?;
        let dir = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(base)?;
        // Guard first so a failed or partial write is cleaned up too.
        let file = Self {
            path: dir.path().join(AUDIO_FILE_NAME),
            dir: Some(dir),
        };
        let mut out = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file.path)?;
        out.write_all(data)?;
        debug!(path = %file.path.display(), bytes = data.len(), "audio file written");
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file and its directory now, reporting failure instead of only logging it.
    pub fn remove(mut self) -> Result<()> {
        match self.dir.take().map(TempDir::close) {
            None | Some(Ok(())) => Ok(()),
            Some(Err(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Some(Err(e)) => Err(e.into()),
        }
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };
        let dir_path = dir.path().to_path_buf();
        match dir.close() {
            Ok(()) => debug!(path = %dir_path.display(), "audio file removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %dir_path.display(), error = %e, "failed to remove audio file"),
        }
    }
}
