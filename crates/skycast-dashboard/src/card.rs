//! Current-conditions card

use crate::icons::weather_icon;
use crate::round_half_up;
use serde::Serialize;
use skycast_core::ForecastEntry;

/// Summary card for the selected hour
///
/// Temperatures and precipitation probability are rounded to the nearest
/// integer for display; rain/snow millimeters stay raw.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub time: String,
    pub icon: String,
    pub temperature: Option<i64>,
    pub feels_like: Option<i64>,
    pub precip_prob: Option<i64>,
    pub rain_mm: Option<f64>,
    pub snow_mm: Option<f64>,
    pub weather_desc: String,
}

impl CardView {
    pub fn from_entry(entry: &ForecastEntry) -> Self {
        Self {
            time: entry.time.clone(),
            icon: weather_icon(&entry.weather_desc).to_string(),
            temperature: entry.temperature.map(round_half_up),
            feels_like: entry.feels_like.map(round_half_up),
            precip_prob: entry.precip_prob.map(round_half_up),
            rain_mm: entry.rain_mm,
            snow_mm: entry.snow_mm,
            weather_desc: entry.weather_desc.clone(),
        }
    }
}
