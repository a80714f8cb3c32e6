use async_trait::async_trait;
use reqwest::{Client, Request};
use std::time::Duration;

use crate::{CurrentWeatherReport, FetchError, ForecastReport, fetch::fetch_json};

use super::WeatherSource;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Only metric units are ever requested.
const UNITS: &str = "metric";

/// Full URLs of the two endpoints in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub current: String,
    pub forecast: String,
}

impl Endpoints {
    /// Endpoints below `base`, e.g. a mock server or a proxy.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            current: format!("{base}/data/2.5/weather"),
            forecast: format!("{base}/data/2.5/forecast"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    http: Client,
    endpoints: Endpoints,
}

impl OpenWeatherClient {
    /// Client with custom endpoints and an optional request timeout.
    pub fn with_options(
        api_key: String,
        endpoints: Endpoints,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            api_key,
            http,
            endpoints,
        })
    }

    /// `GET <current>?q=<city>&appid=<key>&units=metric`, city URL-encoded.
    pub fn current_request(&self, city: &str) -> Result<Request, FetchError> {
        self.request(&self.endpoints.current, city)
    }

    /// `GET <forecast>?q=<city>&appid=<key>&units=metric`, city URL-encoded.
    pub fn forecast_request(&self, city: &str) -> Result<Request, FetchError> {
        self.request(&self.endpoints.forecast, city)
    }

    pub async fn fetch_current(&self, city: &str) -> Result<CurrentWeatherReport, FetchError> {
        let request = self.current_request(city)?;
        fetch_json(&self.http, request).await
    }

    /// 5-day forecast in 3-hour steps.
    pub async fn fetch_forecast(&self, city: &str) -> Result<ForecastReport, FetchError> {
        let request = self.forecast_request(city)?;
        fetch_json(&self.http, request).await
    }

    fn request(&self, endpoint: &str, city: &str) -> Result<Request, FetchError> {
        self.http
            .get(endpoint)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
            ])
            .build()
            .map_err(FetchError::Transport)
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<CurrentWeatherReport, FetchError> {
        self.fetch_current(city).await
    }

    async fn forecast(&self, city: &str) -> Result<ForecastReport, FetchError> {
        self.fetch_forecast(city).await
    }
}
