//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - The OpenWeather response schema
//! - A generic JSON fetch helper and the OpenWeather client built on it
//! - HTTP settings, API key resolution and dotenv loading
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod env;
pub mod error;
pub mod fetch;
pub mod model;
pub mod provider;

pub use config::Config;
pub use env::{API_KEY_VAR, EnvSource, ProcessEnv, resolve_api_key};
pub use error::{ConfigError, FetchError};
pub use model::{
    CityInfo, Clouds, Coordinates, CurrentWeatherReport, ForecastEntry, ForecastReport,
    MainMeasurements, PartOfDay, SunInfo, WeatherCondition, Wind,
};
pub use provider::{
    WeatherSource,
    openweather::{Endpoints, OpenWeatherClient},
};
