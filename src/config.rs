//! Command-line flags and the run settings derived from them.
//!
//! Flags are parsed with clap. Environment lookups are captured once into an
//! [`Environment`] snapshot so that [`Settings::from_cli`] stays a pure
//! function of its inputs.

use crate::location::{CityTable, LocationQuery};
use crate::weather::DEFAULT_FORECAST_URL;
use crate::{transport, Error, ErrorContext, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const FORECAST_URL_ENV: &str = "WEATHER_TO_SPEECH_FORECAST_URL";
pub const OPENAI_URL_ENV: &str = "WEATHER_TO_SPEECH_OPENAI_URL";
pub const CITIES_ENV: &str = "WEATHER_TO_SPEECH_CITIES";

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";

pub const MISSING_API_KEY: &str = "OpenAI API key is required. Please provide it using the \
                                   --api_key flag or the OPENAI_API_KEY environment variable.";

pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

#[derive(Parser, Debug, Clone)]
#[command(
    name = "weather-to-speech",
    about = "Summarize today's weather with a language model and read it out loud",
    disable_version_flag = true
)]
pub struct Cli {
    /// City name (default: prague)
    #[arg(short = 'c', long, default_value = "prague")]
    pub city: String,

    /// Latitude if city is not defined
    #[arg(short = 'l', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude if city is not defined
    #[arg(short = 'o', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub lon: f64,

    /// OpenAI API key
    #[arg(short = 'a', long = "api_key")]
    pub api_key: Option<String>,

    /// Show version information and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// YAML file with extra cities (`name: [lat, lon]`), merged over the built-in table
    #[arg(long, value_name = "PATH")]
    pub cities: Option<PathBuf>,

    /// Base directory for the temporary audio file (default: system temp dir)
    #[arg(long = "audio-dir", value_name = "PATH")]
    pub audio_dir: Option<PathBuf>,

    /// Save the audio to a file instead of playing it
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Text printed for `--version`.
pub fn version_text() -> String {
    format!(
        "Version:  {}\nAuthor:  {}\nRepository:  {}",
        VERSION, AUTHOR, REPOSITORY
    )
}

/// Environment variables the program reads, captured at startup.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub api_key: Option<String>,
    pub forecast_url: Option<String>,
    pub openai_url: Option<String>,
    pub cities: Option<PathBuf>,
    pub http_timeout: Option<Duration>,
}

impl Environment {
    pub fn capture() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            forecast_url: env::var(FORECAST_URL_ENV).ok(),
            openai_url: env::var(OPENAI_URL_ENV).ok(),
            cities: env::var_os(CITIES_ENV).map(PathBuf::from),
            http_timeout: transport::timeout_from_env(),
        }
    }
}

/// Flag value first, then the environment. Empty strings count as unset.
pub fn resolve_api_key(flag: Option<&str>, env: Option<&str>) -> Option<String> {
    flag.filter(|k| !k.is_empty())
        .or_else(|| env.filter(|k| !k.is_empty()))
        .map(str::to_owned)
}

/// Base URLs of the remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub forecast_url: String,
    pub openai_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            openai_url: DEFAULT_OPENAI_URL.to_string(),
        }
    }
}

impl Endpoints {
    fn from_env(vars: &Environment) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            forecast_url: checked_url(vars.forecast_url.as_deref(), FORECAST_URL_ENV)?
                .unwrap_or(defaults.forecast_url),
            openai_url: checked_url(vars.openai_url.as_deref(), OPENAI_URL_ENV)?
                .unwrap_or(defaults.openai_url),
        })
    }
}

fn checked_url(value: Option<&str>, key: &str) -> Result<Option<String>> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    url::Url::parse(raw).map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid URL: {}", e),
            ErrorContext::new().with_field_path(key).with_details(raw),
        )
    })?;
    Ok(Some(raw.to_string()))
}

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub location: LocationQuery,
    pub cities: CityTable,
    pub endpoints: Endpoints,
    pub audio_dir: PathBuf,
    pub http_timeout: Option<Duration>,
}

impl Settings {
    /// Settings with built-in defaults; used by tests and embedders.
    pub fn new(api_key: impl Into<String>, location: LocationQuery) -> Self {
        Self {
            api_key: api_key.into(),
            location,
            cities: CityTable::default(),
            endpoints: Endpoints::default(),
            audio_dir: env::temp_dir(),
            http_timeout: None,
        }
    }

    /// Combine flags and environment. The credential is checked first.
    pub fn from_cli(cli: &Cli, vars: &Environment) -> Result<Self> {
        let api_key = resolve_api_key(cli.api_key.as_deref(), vars.api_key.as_deref())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    MISSING_API_KEY,
                    ErrorContext::new().with_field_path("--api_key"),
                )
            })?;

        let mut cities = CityTable::default();
        if let Some(path) = cli.cities.as_ref().or(vars.cities.as_ref()) {
            cities.merge(CityTable::load(path)?);
        }
        debug!(known_cities = cities.len(), "city table ready");

        let settings = Self {
            api_key,
            location: LocationQuery::city(cli.city.clone()).with_coordinates(cli.lat, cli.lon),
            cities,
            endpoints: Endpoints::from_env(vars)?,
            audio_dir: cli.audio_dir.clone().unwrap_or_else(env::temp_dir),
            http_timeout: vars.http_timeout,
        };
        Ok(settings)
    }
}
