//! Fixed WMO weather-code lookup table
//!
//! Open-Meteo reports sky/precipitation conditions as WMO integer codes.
//! The mapping is resolved at fetch time so stored rows stay readable;
//! anything outside the table falls back to "Unknown".

/// Fallback description for codes outside the table
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Weather code to description table (WMO code subset used by Open-Meteo)
const WEATHER_CODES: &[(u16, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snowfall"),
    (73, "Moderate snowfall"),
    (75, "Heavy snowfall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Map a WMO weather code to its human-readable description
pub fn describe_weather_code(code: u16) -> &'static str {
    WEATHER_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, desc)| *desc)
        .unwrap_or(UNKNOWN_DESCRIPTION)
}
