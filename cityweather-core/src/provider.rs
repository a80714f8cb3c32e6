use async_trait::async_trait;
use std::fmt::Debug;

use crate::{CurrentWeatherReport, FetchError, ForecastReport};

pub mod openweather;

/// Something that can answer weather queries for a city.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<CurrentWeatherReport, FetchError>;

    async fn forecast(&self, city: &str) -> Result<ForecastReport, FetchError>;
}
