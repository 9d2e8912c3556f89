//! Core data types for hourly forecast records

use serde::{Deserialize, Serialize};

/// Geographic coordinates from the geocoder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One hourly forecast record for a location
///
/// `time` is an ISO-8601-like local timestamp (`YYYY-MM-DDTHH:MM`) in the
/// upstream reference timezone. Lexicographic order on the string matches
/// chronological order, which the store relies on for sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Hour timestamp, unique within a location
    pub time: String,

    /// Air temperature in degrees Celsius
    pub temperature: Option<f64>,

    /// Apparent temperature in degrees Celsius
    pub feels_like: Option<f64>,

    /// Rain in millimeters
    pub rain_mm: Option<f64>,

    /// Snowfall in millimeters
    pub snow_mm: Option<f64>,

    /// Precipitation probability in percent (0-100)
    pub precip_prob: Option<f64>,

    /// Human-readable sky condition, from the fixed weather-code table
    pub weather_desc: String,
}
