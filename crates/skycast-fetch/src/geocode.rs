//! Forward geocoding via Nominatim (OpenStreetMap)

use crate::{FetchError, FetchResult, Geocoder};
use reqwest::Client;
use serde::Deserialize;
use skycast_core::Coordinates;
use std::time::Duration;
use tracing::debug;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;

// Nominatim rejects requests without a User-Agent
const USER_AGENT: &str = "skycast/0.1.0";

/// One search result; Nominatim returns coordinates as strings
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
}

/// Nominatim-backed geocoder
pub struct NominatimGeocoder {
    client: Client,
}

impl NominatimGeocoder {
    pub fn new() -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Geocoder for NominatimGeocoder {
    async fn lookup(&self, place: &str) -> FetchResult<Coordinates> {
        let response = self
            .client
            .get(NOMINATIM_URL)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Upstream(format!(
                "geocoder returned status {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response.json().await?;
        let best = results
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NoMatch(place.to_string()))?;

        let coords = parse_coordinates(&best)?;
        debug!("Geocoded {:?} to ({}, {})", place, coords.lat, coords.lon);
        Ok(coords)
    }
}

fn parse_coordinates(result: &NominatimResult) -> FetchResult<Coordinates> {
    let lat = result
        .lat
        .parse::<f64>()
        .map_err(|e| FetchError::Upstream(format!("bad latitude {:?}: {}", result.lat, e)))?;
    let lon = result
        .lon
        .parse::<f64>()
        .map_err(|e| FetchError::Upstream(format!("bad longitude {:?}: {}", result.lon, e)))?;
    Ok(Coordinates { lat, lon })
}
