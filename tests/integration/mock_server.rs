//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;
use weather_to_speech::config::Endpoints;
use weather_to_speech::{LocationQuery, Player, Result, Settings};

pub const API_KEY: &str = "sk-test-key";

pub const FORECAST_FIXTURE: &str = include_str!("../fixtures/forecast_prague.json");
pub const CHAT_FIXTURE: &str = include_str!("../fixtures/chat_completion.json");
pub const SUMMARY: &str = "Prague starts cool at 9°C and warms to about 18°C by midday. \
                           Showers are likely this evening, so take an umbrella.";
pub const AUDIO: &[u8] = b"ID3\x04\x00\x00\x00\x00\x00\x00fake-mp3-frames";

/// Test fixture that manages a mock server standing in for both the forecast
/// provider and the OpenAI API.
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Settings pointing every endpoint at the mock server.
    pub fn settings(&self, query: LocationQuery, audio_dir: &Path) -> Settings {
        let mut settings = Settings::new(API_KEY, query);
        settings.endpoints = Endpoints {
            forecast_url: self.base_url.clone(),
            openai_url: self.base_url.clone(),
        };
        settings.audio_dir = audio_dir.to_path_buf();
        settings
    }

    /// Forecast for the given coordinates, as printed in the query string.
    pub async fn mock_forecast(
        &self,
        lat: &str,
        lon: &str,
        status: usize,
        body: impl AsRef<[u8]>,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", "/v1/forecast")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("latitude".into(), lat.into()),
                Matcher::UrlEncoded("longitude".into(), lon.into()),
                Matcher::UrlEncoded(
                    "hourly".into(),
                    "temperature_2m,apparent_temperature,precipitation_probability,precipitation"
                        .into(),
                ),
                Matcher::UrlEncoded(
                    "daily".into(),
                    "temperature_2m_max,temperature_2m_min".into(),
                ),
                Matcher::UrlEncoded("forecast_days".into(), "1".into()),
            ]))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Chat completion; checks the credential, model and prompt prefix.
    pub async fn mock_chat(&self, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(serde_json::json!({
                    "model": "gpt-4o",
                    "max_tokens": 256
                })),
                Matcher::Regex(
                    "You are a meteorologist. Summarize the weather in two sentences.".into(),
                ),
            ]))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Speech synthesis for `input`.
    pub async fn mock_speech(&self, input: &str, status: usize, body: &[u8]) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/v1/audio/speech")
            .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
            .match_body(Matcher::Json(serde_json::json!({
                "model": "tts-1",
                "input": input,
                "voice": "nova"
            })))
            .with_status(status)
            .with_header("content-type", "audio/mpeg")
            .with_body(body)
            .create_async()
            .await
    }

    /// A route that must never be called.
    pub async fn mock_unreachable(&self, method: &str, path: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await
    }
}

/// Player that copies what it was given instead of touching an audio device.
#[derive(Default)]
pub struct RecordingPlayer {
    pub played: StdMutex<Vec<(PathBuf, Vec<u8>)>>,
}

impl RecordingPlayer {
    pub fn calls(&self) -> usize {
        self.played.lock().unwrap().len()
    }
}

impl Player for RecordingPlayer {
    fn play(&self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path)?;
        self.played.lock().unwrap().push((path.to_path_buf(), bytes));
        Ok(())
    }
}

/// Player whose output device is always missing.
pub struct FailingPlayer;

impl Player for FailingPlayer {
    fn play(&self, _path: &Path) -> Result<()> {
        Err(weather_to_speech::Error::Audio(
            "Failed to open output device: no default device".into(),
        ))
    }
}

/// Entries left behind in the audio directory.
pub fn residual_files(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
        .unwrap_or_default()
}
