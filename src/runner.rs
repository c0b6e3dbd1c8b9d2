//! One forward pass: location → forecast → summary → speech → playback.
//!
//! Every stage returns a `Result`; the first error ends the run and is handed
//! back to the caller untouched.

use crate::chat::{ChatClient, DEFAULT_CHAT_MODEL};
use crate::config::Settings;
use crate::location::Coordinates;
use crate::playback::{self, Player};
use crate::tts::TtsClient;
use crate::weather::WeatherClient;
use crate::{transport, Result};
use std::sync::Arc;
use tracing::info;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub coordinates: Coordinates,
    pub summary: String,
    pub audio_bytes: usize,
}

pub struct Runner {
    settings: Settings,
    player: Arc<dyn Player>,
}

impl Runner {
    pub fn new(settings: Settings, player: Arc<dyn Player>) -> Self {
        Self { settings, player }
    }

    pub async fn run(&self) -> Result<Report> {
        let settings = &self.settings;

        let coordinates = settings.cities.resolve(&settings.location)?;
        info!(
            city = settings.location.city.as_str(),
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "location resolved"
        );

        let http_client = transport::build_client(settings.http_timeout)?;
        let weather = WeatherClient::builder()
            .http_client(http_client.clone())
            .base_url(settings.endpoints.forecast_url.as_str())
            .build()?;
        let chat = ChatClient::builder()
            .http_client(http_client.clone())
            .base_url(settings.endpoints.openai_url.as_str())
            .api_key(settings.api_key.as_str())
            .build()?;
        let tts = TtsClient::builder()
            .http_client(http_client)
            .base_url(settings.endpoints.openai_url.as_str())
            .api_key(settings.api_key.as_str())
            .build()?;

        let forecast = weather.fetch(coordinates).await?;
        let summary = chat.summarize(&forecast).await?;
        info!(model = DEFAULT_CHAT_MODEL, summary = summary.as_str(), "forecast summarized");

        let audio = tts.synthesize(&summary).await?;
        playback::play_bytes(self.player.clone(), &settings.audio_dir, &audio.data).await?;
        info!(bytes = audio.len(), "playback finished");

        Ok(Report {
            coordinates,
            summary,
            audio_bytes: audio.len(),
        })
    }
}
