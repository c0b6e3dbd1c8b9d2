use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use std::env;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Environment variable holding an optional request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "WEATHER_TO_SPEECH_HTTP_TIMEOUT_SECS";

/// Build the shared HTTP client.
///
/// No timeout unless one is given; `None` keeps requests unbounded.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("weather-to-speech/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))
}

/// Read the timeout knob from the environment. Unparseable or zero values are ignored.
pub fn timeout_from_env() -> Option<Duration> {
    env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

/// Send a prepared request and return the body of a successful response.
///
/// Transport failures become [`Error::Network`]; non-2xx statuses become
/// [`Error::Api`] carrying the response text.
pub async fn send(request: reqwest::RequestBuilder, source: &str, endpoint: &str) -> Result<Bytes> {
    let start = Instant::now();
    debug!(source, endpoint, "sending request");

    let response = request.send().await.map_err(|e| {
        Error::network_with_context(
            format!("{} request failed: {}", source, e),
            ErrorContext::new()
                .with_source(source)
                .with_details(endpoint),
        )
    })?;

    let status = response.status();
    let body = response.bytes().await.map_err(|e| {
        Error::network_with_context(
            format!("Failed to read {} response: {}", source, e),
            ErrorContext::new()
                .with_source(source)
                .with_details(endpoint),
        )
    })?;

    info!(
        source,
        endpoint,
        http_status = status.as_u16(),
        bytes = body.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request finished"
    );

    if !status.is_success() {
        return Err(Error::api_with_context(
            status.as_u16(),
            String::from_utf8_lossy(&body).into_owned(),
            ErrorContext::new()
                .with_source(source)
                .with_details(endpoint),
        ));
    }
    Ok(body)
}
