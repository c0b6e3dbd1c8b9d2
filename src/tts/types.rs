//! TTS (Text-to-Speech) types.

use bytes::Bytes;

/// MP3 audio returned by the speech endpoint.
#[derive(Debug, Clone)]
pub struct AudioOutput {
    pub data: Bytes,
}

impl AudioOutput {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
