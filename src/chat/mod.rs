//! Forecast summarization through an OpenAI-compatible chat-completion endpoint.

mod client;
mod types;

pub use client::{
    build_prompt, extract_summary, ChatClient, ChatClientBuilder, DEFAULT_CHAT_MODEL, SUMMARY_PATH,
};
pub use types::{ChatRequest, Message, MessageRole, SamplingParams};
