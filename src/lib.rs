//! # weather-to-speech
//!
//! Fetches today's forecast for a location, asks a chat model for a two
//! sentence summary (including whether an umbrella is needed), turns the
//! summary into speech and plays it.
//!
//! ## Overview
//!
//! The run is a single forward pipeline with no retries:
//!
//! 1. resolve coordinates from a city table or explicit latitude/longitude
//! 2. GET the Open-Meteo forecast
//! 3. POST the forecast to a chat-completion endpoint
//! 4. POST the summary to a speech endpoint
//! 5. write the audio to a private temporary file, play it, delete it
//!
//! Any failure aborts the run with an [`Error`]; only the binary turns that
//! into an exit code.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weather_to_speech::{LocationQuery, RodioPlayer, Runner, Settings};
//!
//! #[tokio::main]
//! async fn main() -> weather_to_speech::Result<()> {
//!     let settings = Settings::new("sk-...", LocationQuery::city("prague"));
//!     let report = Runner::new(settings, Arc::new(RodioPlayer::new())).run().await?;
//!     println!("{}", report.summary);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Command-line flags, environment snapshot, run settings |
//! | [`location`] | City table and coordinate resolution |
//! | [`weather`] | Forecast client |
//! | [`chat`] | Chat-completion summarizer |
//! | [`tts`] | Speech synthesis client |
//! | [`playback`] | Temporary audio file and blocking playback |
//! | [`runner`] | Stage sequencing |

pub mod chat;
pub mod config;
pub mod location;
pub mod playback;
pub mod runner;
pub mod transport;
pub mod tts;
pub mod utils;
pub mod weather;

pub use config::{Cli, Environment, Settings};
pub use location::{CityTable, Coordinates, LocationQuery};
pub use playback::{FileSink, Player, RodioPlayer};
pub use runner::{Report, Runner};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
