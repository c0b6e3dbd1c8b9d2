//! Forecast retrieval from the Open-Meteo API.

mod client;

pub use client::{WeatherClient, WeatherClientBuilder, DEFAULT_FORECAST_URL};
