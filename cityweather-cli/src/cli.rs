use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use cityweather_core::{
    Config, ConfigError, EnvSource, OpenWeatherClient, ProcessEnv, WeatherSource, resolve_api_key,
};
use clap::Parser;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "cityweather",
    version,
    about = "Current weather or a 5-day forecast for a city, from OpenWeatherMap"
)]
pub struct Cli {
    /// City name (e.g. 'London', 'Nairobi').
    #[arg(long)]
    pub city: Option<String>,

    /// Get the 5-day / 3-hour forecast instead of current weather.
    #[arg(long)]
    pub forecast: bool,

    /// Request timeout in seconds; overrides the config file.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Dotenv-style file read before looking up OPENWEATHER_API_KEY.
    #[arg(long, value_name = "PATH", default_value = ".env")]
    pub env_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Current,
    Forecast,
}

impl Mode {
    fn label(self) -> &'static str {
        match self {
            Mode::Current => "current weather",
            Mode::Forecast => "forecast",
        }
    }
}

/// A validated request: both inputs are present before anything touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub api_key: String,
    pub city: String,
    pub mode: Mode,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let env = ProcessEnv::load(&self.env_file);
        let config = Config::load()?;

        let report = self.execute(&env, &config, &Local).await?;
        print!("{report}");

        Ok(())
    }

    /// Validate inputs, fetch and render. Returns the text to print.
    pub async fn execute<Tz>(
        &self,
        env: &dyn EnvSource,
        config: &Config,
        tz: &Tz,
    ) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let query = self.query(env)?;

        let timeout = self
            .timeout
            .map(Duration::from_secs)
            .or_else(|| config.timeout());
        let client =
            OpenWeatherClient::with_options(query.api_key.clone(), config.endpoints(), timeout)?;

        report(&client, &query, tz).await
    }

    /// API key first, then city, mirroring the order users fix them in.
    pub fn query(&self, env: &dyn EnvSource) -> Result<Query, ConfigError> {
        let api_key = resolve_api_key(env)?;

        let city = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .ok_or(ConfigError::MissingCity)?
            .to_string();

        let mode = if self.forecast {
            Mode::Forecast
        } else {
            Mode::Current
        };

        Ok(Query {
            api_key,
            city,
            mode,
        })
    }
}

/// Fetch the report selected by `query.mode` and render it.
pub async fn report<Tz>(source: &dyn WeatherSource, query: &Query, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let context = || format!("Error fetching {} for {}", query.mode.label(), query.city);

    let text = match query.mode {
        Mode::Current => {
            let data = source.current(&query.city).await.with_context(context)?;
            render::render_current(&data, tz)
        }
        Mode::Forecast => {
            let data = source.forecast(&query.city).await.with_context(context)?;
            render::render_forecast(&data, tz)
        }
    };

    log::debug!("rendered {} for {}", query.mode.label(), query.city);
    Ok(text)
}
