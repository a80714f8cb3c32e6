//! Plain-text rendering of weather reports.
//!
//! Every function takes the display time zone explicitly; the binary passes
//! `chrono::Local`.

use std::{collections::BTreeMap, fmt::Display, fmt::Write};

use chrono::{DateTime, TimeZone};
use cityweather_core::{CurrentWeatherReport, ForecastEntry, ForecastReport, WeatherCondition};

const RULE: &str = "------------------------------------";
const NO_CONDITION: (&str, &str) = ("N/A", "No specific conditions");

pub fn render_current<Tz>(report: &CurrentWeatherReport, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (main, description) = condition_labels(report.primary_condition());
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Current Weather for {}, {}:", report.name, report.sys.country);
    let _ = writeln!(
        out,
        "  Temperature: {:.1}°C (Feels like: {:.1}°C)",
        report.main.temp, report.main.feels_like
    );
    let _ = writeln!(out, "  Conditions: {main} ({description})");
    let _ = writeln!(out, "  Humidity: {}%", report.main.humidity);
    let _ = writeln!(out, "  Wind: {:.1} m/s", report.wind.speed);
    let _ = writeln!(out, "  Pressure: {} hPa", report.main.pressure);
    let _ = writeln!(out, "  Cloudiness: {}%", report.clouds.all);
    let _ = writeln!(out, "  Sunrise: {}", clock_time(report.sys.sunrise, tz));
    let _ = writeln!(out, "  Sunset: {}", clock_time(report.sys.sunset, tz));
    let _ = writeln!(out, "{RULE}");

    out
}

pub fn render_forecast<Tz>(report: &ForecastReport, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();

    let _ = writeln!(
        out,
        "5-Day / 3-Hour Forecast for {}, {}:",
        report.city.name, report.city.country
    );
    let _ = writeln!(out, "{RULE}");

    for (date, entries) in group_by_day(&report.list, tz) {
        let _ = writeln!(out, "\nDate: {date}");
        for entry in entries {
            let _ = writeln!(out, "{}", forecast_line(entry, tz));
        }
    }

    let _ = writeln!(out, "{RULE}");
    out
}

/// Bucket entries by local calendar day, labelled `YYYY-MM-DD (Ddd)`.
///
/// Labels iterate in ascending order, which is chronological thanks to the
/// zero-padded date prefix. Entries keep their input order inside a bucket.
pub fn group_by_day<'a, Tz>(
    entries: &'a [ForecastEntry],
    tz: &Tz,
) -> BTreeMap<String, Vec<&'a ForecastEntry>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut days: BTreeMap<String, Vec<&ForecastEntry>> = BTreeMap::new();
    for entry in entries {
        let label = match local_time(entry.dt, tz) {
            Some(at) => at.format("%Y-%m-%d (%a)").to_string(),
            None => entry.dt_txt.clone(),
        };
        days.entry(label).or_default().push(entry);
    }
    days
}

/// Probability `0.0..=1.0` as a whole percentage, e.g. `0.5` -> `50%`.
pub fn format_pop(pop: f64) -> String {
    format!("{:.0}%", pop * 100.0)
}

fn forecast_line<Tz>(entry: &ForecastEntry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (main, description) = condition_labels(entry.primary_condition());

    format!(
        "  {}: Temp: {:.1}°C, Feels: {:.1}°C, Cond: {main} ({description}), \
         Wind: {:.1} m/s, Pop: {}",
        clock_time(entry.dt, tz),
        entry.main.temp,
        entry.main.feels_like,
        entry.wind.speed,
        format_pop(entry.pop),
    )
}

fn condition_labels(condition: Option<&WeatherCondition>) -> (&str, &str) {
    condition
        .map(|c| (c.main.as_str(), c.description.as_str()))
        .unwrap_or(NO_CONDITION)
}

fn local_time<Tz: TimeZone>(ts: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::from_timestamp(ts, 0).map(|utc| utc.with_timezone(tz))
}

fn clock_time<Tz>(ts: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    local_time(ts, tz)
        .map(|at| at.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
