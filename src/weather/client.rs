//! Forecast client.

use crate::location::Coordinates;
use crate::{transport, Error, ErrorContext, Result};

pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com";

const FORECAST_PATH: &str = "/v1/forecast";
const HOURLY_FIELDS: &str =
    "temperature_2m,apparent_temperature,precipitation_probability,precipitation";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min";
const FORECAST_DAYS: u32 = 1;

/// Fetches one-day forecasts and hands back the raw JSON text.
pub struct WeatherClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn builder() -> WeatherClientBuilder {
        WeatherClientBuilder::new()
    }

    /// Full request URL for `coords`. Coordinates are printed with six decimals.
    pub fn forecast_url(&self, coords: Coordinates) -> String {
        format!(
            "{}{}?latitude={:.6}&longitude={:.6}&hourly={}&daily={}&forecast_days={}",
            self.base_url.trim_end_matches('/'),
            FORECAST_PATH,
            coords.latitude,
            coords.longitude,
            HOURLY_FIELDS,
            DAILY_FIELDS,
            FORECAST_DAYS,
        )
    }

    /// GET the forecast. The body is returned untouched.
    pub async fn fetch(&self, coords: Coordinates) -> Result<String> {
        let url = self.forecast_url(coords);
        let body = transport::send(self.http_client.get(&url), "weather", &url).await?;
        String::from_utf8(body.to_vec()).map_err(|e| {
            Error::invalid_response(
                format!("forecast is not UTF-8: {}", e),
                ErrorContext::new().with_source("weather").with_details(url),
            )
        })
    }
}

pub struct WeatherClientBuilder {
    http_client: Option<reqwest::Client>,
    base_url: Option<String>,
}

impl WeatherClientBuilder {
    pub fn new() -> Self {
        Self {
            http_client: None,
            base_url: None,
        }
    }

    /// Reuse an existing client (shared connection pool, timeout settings).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<WeatherClient> {
        let http_client = match self.http_client {
            Some(c) => c,
            None => transport::build_client(None)?,
        };
        Ok(WeatherClient {
            http_client,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_FORECAST_URL.to_string()),
        })
    }
}

impl Default for WeatherClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
