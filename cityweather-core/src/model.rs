//! Records mirroring the OpenWeather JSON shapes.
//!
//! Field names follow the provider's JSON so `serde` can decode responses
//! without renames. Fields the provider routinely leaves out default to zero
//! or empty instead of failing the decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

/// A single condition descriptor, e.g. `Clouds` / `overcast clouds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Temperatures are in °C since every request asks for metric units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainMeasurements {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// hPa
    pub pressure: u32,
    /// Percent.
    pub humidity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// m/s
    pub speed: f64,
    #[serde(default)]
    pub deg: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clouds {
    pub all: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunInfo {
    #[serde(rename = "type", default)]
    pub kind: i64,
    #[serde(default)]
    pub id: i64,
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityInfo {
    pub id: i64,
    pub name: String,
    pub coord: Coordinates,
    pub country: String,
    #[serde(default)]
    pub population: u64,
    /// Shift from UTC in seconds.
    pub timezone: i32,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Response of the `/weather` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherReport {
    pub coord: Coordinates,
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub base: String,
    pub main: MainMeasurements,
    /// Meters.
    #[serde(default)]
    pub visibility: u32,
    pub wind: Wind,
    pub clouds: Clouds,
    pub dt: i64,
    pub sys: SunInfo,
    pub timezone: i32,
    pub id: i64,
    pub name: String,
    pub cod: i32,
}

impl CurrentWeatherReport {
    pub fn primary_condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}

/// Day/night marker of a forecast slot (`sys.pod`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartOfDay {
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "n")]
    Night,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSys {
    pub pod: PartOfDay,
}

/// One 3-hour slot of the `/forecast` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: MainMeasurements,
    /// The provider occasionally sends this empty.
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub clouds: Clouds,
    pub wind: Wind,
    #[serde(default)]
    pub visibility: u32,
    /// Probability of precipitation in `0.0..=1.0`.
    #[serde(default)]
    pub pop: f64,
    pub sys: ForecastSys,
    /// Provider-formatted UTC timestamp, e.g. `2024-05-01 12:00:00`.
    pub dt_txt: String,
}

impl ForecastEntry {
    pub fn primary_condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}

/// Response of the `/forecast` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Status code as a string, e.g. `"200"`.
    pub cod: String,
    #[serde(default)]
    pub message: f64,
    pub cnt: u32,
    pub list: Vec<ForecastEntry>,
    pub city: CityInfo,
}
