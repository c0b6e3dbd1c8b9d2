//! Text-to-speech through the OpenAI speech endpoint.

mod client;
mod types;

pub use client::{TtsClient, TtsClientBuilder, DEFAULT_TTS_MODEL, DEFAULT_VOICE};
pub use types::AudioOutput;
