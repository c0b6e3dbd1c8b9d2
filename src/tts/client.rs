//! TTS (Text-to-Speech) client.

use super::types::AudioOutput;
use crate::{transport, Error, ErrorContext, Result};

pub const DEFAULT_TTS_MODEL: &str = "tts-1";
pub const DEFAULT_VOICE: &str = "nova";

const SPEECH_PATH: &str = "/v1/audio/speech";

/// Client for text-to-speech synthesis.
pub struct TtsClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    /// JSON body for a synthesis request. No `response_format`: the endpoint answers in MP3.
    pub fn request_body(&self, text: &str) -> serde_json::Value {
        serde_json::json!({
            "model": DEFAULT_TTS_MODEL,
            "input": text,
            "voice": DEFAULT_VOICE,
        })
    }

    pub async fn synthesize(&self, text: &str) -> Result<AudioOutput> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), SPEECH_PATH);
        let request = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&self.request_body(text));
        let data = transport::send(request, "tts", &endpoint).await?;
        if data.is_empty() {
            return Err(Error::invalid_response(
                "speech endpoint returned no audio",
                ErrorContext::new()
                    .with_source("tts")
                    .with_details(endpoint),
            ));
        }
        Ok(AudioOutput { data })
    }
}

pub struct TtsClientBuilder {
    http_client: Option<reqwest::Client>,
    api_key: Option<String>,
    base_url: Option<String>,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self {
            http_client: None,
            api_key: None,
            base_url: None,
        }
    }
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<TtsClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required",
                    ErrorContext::new().with_source("tts"),
                )
            })?;
        let http_client = match self.http_client {
            Some(c) => c,
            None => transport::build_client(None)?,
        };
        Ok(TtsClient {
            http_client,
            base_url: self
                .base_url
                .unwrap_or_else(|| "https://api.openai.com".to_string()),
            api_key,
        })
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
