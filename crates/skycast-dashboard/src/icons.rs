//! Fixed description-to-icon lookup

/// Fallback icon for unmapped descriptions
pub const UNKNOWN_ICON: &str = "unknown.svg";

/// Description (lowercase) to icon asset table
const ICONS: &[(&str, &str)] = &[
    ("clear sky", "clear_day.svg"),
    ("mainly clear", "clear_day.svg"),
    ("partly cloudy", "partly_cloudy_day.svg"),
    ("overcast", "cloudy.svg"),
    ("fog", "haze_fog_dust_smoke.svg"),
    ("depositing rime fog", "haze_fog_dust_smoke.svg"),
    ("light drizzle", "cloudy_with_rain_dark.svg"),
    ("moderate drizzle", "cloudy_with_rain_dark.svg"),
    ("dense drizzle", "cloudy_with_rain_dark.svg"),
    ("light freezing drizzle", "cloudy_with_rain_dark.svg"),
    ("dense freezing drizzle", "cloudy_with_rain_dark.svg"),
    ("slight rain", "cloudy_with_rain_dark.svg"),
    ("moderate rain", "cloudy_with_rain_dark.svg"),
    ("heavy rain", "cloudy_with_rain_dark.svg"),
    ("light freezing rain", "cloudy_with_rain_dark.svg"),
    ("heavy freezing rain", "cloudy_with_rain_dark.svg"),
    ("slight snowfall", "cloudy_with_snow_dark.svg"),
    ("moderate snowfall", "cloudy_with_snow_dark.svg"),
    ("heavy snowfall", "cloudy_with_snow_dark.svg"),
    ("snow grains", "cloudy_with_snow_dark.svg"),
    ("slight rain showers", "cloudy_with_rain_dark.svg"),
    ("moderate rain showers", "cloudy_with_rain_dark.svg"),
    ("violent rain showers", "cloudy_with_rain_dark.svg"),
    ("slight snow showers", "cloudy_with_snow_dark.svg"),
    ("heavy snow showers", "cloudy_with_snow_dark.svg"),
    ("thunderstorm", "isolated_thunderstorms.svg"),
    ("thunderstorm with slight hail", "isolated_thunderstorms.svg"),
    ("thunderstorm with heavy hail", "isolated_thunderstorms.svg"),
];

/// Map a weather description to its icon file (case-insensitive, trimmed)
pub fn weather_icon(description: &str) -> &'static str {
    let key = description.trim().to_lowercase();
    ICONS
        .iter()
        .find(|(desc, _)| *desc == key)
        .map(|(_, icon)| *icon)
        .unwrap_or(UNKNOWN_ICON)
}
