//! Hourly forecast via Open-Meteo

use crate::{FetchError, FetchResult, ForecastProvider};
use reqwest::Client;
use serde::Deserialize;
use skycast_core::{describe_weather_code, Coordinates, ForecastEntry, UNKNOWN_DESCRIPTION};
use std::time::Duration;
use tracing::debug;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
const REQUEST_TIMEOUT_SECS: u64 = 10;

// Upstream reference timezone for the hourly timestamps
const FORECAST_TIMEZONE: &str = "Europe/Berlin";

const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,precipitation,apparent_temperature,rain,snowfall,weather_code";

/// Number of hourly samples kept from the upstream response
pub const FORECAST_HOURS: usize = 24;

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    hourly: HourlyBlock,
}

/// Parallel arrays, one slot per hour; measurements may be null
#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    apparent_temperature: Vec<Option<f64>>,
    rain: Vec<Option<f64>>,
    snowfall: Vec<Option<f64>>,
    precipitation_probability: Vec<Option<f64>>,
    weather_code: Vec<Option<u16>>,
}

/// Open-Meteo-backed forecast provider
pub struct OpenMeteoProvider {
    client: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn hourly(&self, coords: Coordinates) -> FetchResult<Vec<ForecastEntry>> {
        let response = self
            .client
            .get(OPEN_METEO_URL)
            .query(&[
                ("latitude", coords.lat.to_string()),
                ("longitude", coords.lon.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", FORECAST_TIMEZONE.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Upstream(format!(
                "forecast service returned status {}",
                response.status()
            )));
        }

        let payload: OpenMeteoResponse = response.json().await?;
        let entries = to_entries(&payload.hourly);
        debug!(
            "Fetched {} hourly samples for ({}, {})",
            entries.len(),
            coords.lat,
            coords.lon
        );
        Ok(entries)
    }
}

/// Convert the parallel hourly arrays into entries, keeping the first
/// `FORECAST_HOURS` samples and resolving weather codes to descriptions
fn to_entries(hourly: &HourlyBlock) -> Vec<ForecastEntry> {
    hourly
        .time
        .iter()
        .take(FORECAST_HOURS)
        .enumerate()
        .map(|(i, time)| ForecastEntry {
            time: time.clone(),
            temperature: hourly.temperature_2m.get(i).copied().flatten(),
            feels_like: hourly.apparent_temperature.get(i).copied().flatten(),
            rain_mm: hourly.rain.get(i).copied().flatten(),
            snow_mm: hourly.snowfall.get(i).copied().flatten(),
            precip_prob: hourly.precipitation_probability.get(i).copied().flatten(),
            weather_desc: hourly
                .weather_code
                .get(i)
                .copied()
                .flatten()
                .map(describe_weather_code)
                .unwrap_or(UNKNOWN_DESCRIPTION)
                .to_string(),
        })
        .collect()
}
