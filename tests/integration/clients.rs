//! Individual clients against the mock server.

use crate::integration::mock_server::*;
use weather_to_speech::chat::ChatClient;
use weather_to_speech::tts::TtsClient;
use weather_to_speech::weather::WeatherClient;
use weather_to_speech::{Coordinates, Error};

#[tokio::test]
async fn test_weather_body_returned_untouched() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_forecast("49.195100", "16.606800", 200, FORECAST_FIXTURE)
        .await;

    let client = WeatherClient::builder()
        .base_url(fixture.base_url.as_str())
        .build()
        .unwrap();
    let body = client
        .fetch(Coordinates::new(49.1951, 16.6068))
        .await
        .unwrap();
    assert_eq!(body, FORECAST_FIXTURE);
}

#[tokio::test]
async fn test_weather_body_not_utf8_is_invalid_response() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_forecast("49.195100", "16.606800", 200, b"{\"t\":\"\xff\xfe\"}")
        .await;

    let client = WeatherClient::builder()
        .base_url(fixture.base_url.as_str())
        .build()
        .unwrap();
    let err = client
        .fetch(Coordinates::new(49.1951, 16.6068))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { .. }));
    assert_eq!(
        err.context().and_then(|c| c.source.as_deref()),
        Some("weather")
    );
}

#[tokio::test]
async fn test_chat_summary_matches_first_choice() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture.mock_chat(200, CHAT_FIXTURE).await;

    let client = ChatClient::builder()
        .base_url(fixture.base_url.as_str())
        .api_key(API_KEY)
        .build()
        .unwrap();
    let summary = client.summarize(FORECAST_FIXTURE).await.unwrap();
    assert_eq!(summary, SUMMARY);
}

#[tokio::test]
async fn test_chat_rate_limit_surfaces_status() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_chat(429, r#"{"error":{"message":"Rate limit reached"}}"#)
        .await;

    let client = ChatClient::builder()
        .base_url(fixture.base_url.as_str())
        .api_key(API_KEY)
        .build()
        .unwrap();
    let err = client.summarize("{}").await.unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.context().and_then(|c| c.source.as_deref()), Some("chat"));
}

#[tokio::test]
async fn test_speech_returns_raw_bytes() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture.mock_speech("Dry all day.", 200, AUDIO).await;

    let client = TtsClient::builder()
        .base_url(fixture.base_url.as_str())
        .api_key(API_KEY)
        .build()
        .unwrap();
    let audio = client.synthesize("Dry all day.").await.unwrap();
    assert_eq!(audio.data.as_ref(), AUDIO);
}

#[tokio::test]
async fn test_speech_empty_body_is_an_error() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture.mock_speech("Dry all day.", 200, b"").await;

    let client = TtsClient::builder()
        .base_url(fixture.base_url.as_str())
        .api_key(API_KEY)
        .build()
        .unwrap();
    let err = client.synthesize("Dry all day.").await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { .. }));
    assert_eq!(err.status(), None);
    assert_eq!(err.context().and_then(|c| c.source.as_deref()), Some("tts"));
}
