//! Playback of synthesized audio.
//!
//! The decoder reads from a file, so audio is first written to a
//! [`TempAudioFile`]. Playback itself is blocking and runs on tokio's blocking
//! pool; awaiting that task is the only point where the run waits on audio.

mod player;
mod temp_file;

pub use player::{FileSink, Player, RodioPlayer};
pub use temp_file::{TempAudioFile, AUDIO_FILE_NAME};

use crate::{Error, Result};
use std::path::Path;
use std::sync::Arc;

/// Write MP3 `bytes` to a private `weather.mp3` under `dir`, play it to the
/// end, then delete it.
///
/// The file is deleted even when decoding or the output device fails; in that
/// case the playback error is returned.
pub async fn play_bytes(player: Arc<dyn Player>, dir: &Path, bytes: &[u8]) -> Result<()> {
    let file = TempAudioFile::create(dir, bytes)?;
    let path = file.path().to_path_buf();

    let played = tokio::task::spawn_blocking(move || player.play(&path))
        .await
        .map_err(|e| Error::Runtime(format!("Playback task failed: {}", e)))
        .and_then(|r| r);

    match played {
        Ok(()) => file.remove(),
        Err(e) => {
            drop(file);
            Err(e)
        }
    }
}
