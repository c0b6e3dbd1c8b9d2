//! Chat-completion client used to turn a forecast into two spoken sentences.

use super::types::{ChatRequest, Message, SamplingParams};
use crate::utils::json_path;
use crate::{transport, Error, ErrorContext, Result};

pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o";

const CHAT_PATH: &str = "/v1/chat/completions";

/// Where the reply text lives in a chat-completion response.
pub const SUMMARY_PATH: &str = "choices[0].message.content";

const INSTRUCTION: &str = "You are a meteorologist. Summarize the weather in two sentences. \
                           Tell me if I need an umbrella.";

/// Instruction followed by the raw forecast JSON.
pub fn build_prompt(forecast: &str) -> String {
    format!("{} {}", INSTRUCTION, forecast)
}

/// Pull `choices[0].message.content` out of a response body.
pub fn extract_summary(body: &[u8]) -> Result<String> {
    let json: serde_json::Value = serde_json::from_slice(body)?;
    json_path::get_str(&json, SUMMARY_PATH)
        .map(str::to_owned)
        .ok_or_else(|| Error::missing_field(SUMMARY_PATH))
}

pub struct ChatClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ChatClient {
    pub fn builder() -> ChatClientBuilder {
        ChatClientBuilder::new()
    }

    /// Ask the model for a short forecast summary.
    pub async fn summarize(&self, forecast: &str) -> Result<String> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), CHAT_PATH);
        let body = ChatRequest {
            model: DEFAULT_CHAT_MODEL,
            messages: vec![Message::user(build_prompt(forecast))],
            sampling: SamplingParams::default(),
        };
        let request = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body);
        let bytes = transport::send(request, "chat", &endpoint).await?;
        extract_summary(&bytes)
    }
}

pub struct ChatClientBuilder {
    http_client: Option<reqwest::Client>,
    api_key: Option<String>,
    base_url: Option<String>,
}

impl ChatClientBuilder {
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

    pub fn build(self) -> Result<ChatClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required",
                    ErrorContext::new().with_source("chat"),
                )
            })?;
        let http_client = match self.http_client {
            Some(c) => c,
            None => transport::build_client(None)?,
        };
        Ok(ChatClient {
            http_client,
            base_url: self
                .base_url
                .unwrap_or_else(|| "https://api.openai.com".to_string()),
            api_key,
        })
    }
}

impl Default for ChatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
