//! Core library for the `weather-checker` CLI.
//!
//! This crate defines:
//! - Kelvin and timestamp conversions
//! - The OpenWeather current-weather client
//! - Decoding the response into a [`WeatherRecord`] and rendering it
//! - Configuration & credentials handling
//!
//! It is used by `weather-checker`, but can also be reused by other binaries.

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod model;
pub mod present;
pub mod report;
pub mod request_url;

pub use client::{Fetched, WeatherClient};
pub use config::Config;
pub use error::{Result, WeatherError};
pub use model::{WeatherQuery, WeatherRecord};
pub use report::report;
