//! Schema types and DDL for the forecast table

use serde::{Deserialize, Serialize};
use skycast_core::ForecastEntry;
use sqlx::FromRow;

/// One stored forecast row, including its partition key
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ForecastRow {
    pub location: String,
    pub time: String,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub rain_mm: Option<f64>,
    pub snow_mm: Option<f64>,
    pub precip_prob: Option<f64>,
    pub weather_desc: String,
}

impl From<ForecastRow> for ForecastEntry {
    fn from(row: ForecastRow) -> Self {
        ForecastEntry {
            time: row.time,
            temperature: row.temperature,
            feels_like: row.feels_like,
            rain_mm: row.rain_mm,
            snow_mm: row.snow_mm,
            precip_prob: row.precip_prob,
            weather_desc: row.weather_desc,
        }
    }
}

/// Table names
pub mod tables {
    pub const FORECASTS: &str = "forecasts";
}

/// DDL applied by `Store::init` (create-if-absent, never migrated)
pub const CREATE_FORECASTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS forecasts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    location TEXT NOT NULL,
    time TEXT NOT NULL,
    temperature REAL,
    feels_like REAL,
    rain_mm REAL,
    snow_mm REAL,
    precip_prob REAL,
    weather_desc TEXT,
    UNIQUE(location, time)
)
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_to_entry() {
        let row = ForecastRow {
            location: "Berlin".into(),
            time: "2026-08-26T14:00".into(),
            temperature: Some(21.0),
            feels_like: Some(19.5),
            rain_mm: Some(0.0),
            snow_mm: None,
            precip_prob: Some(10.0),
            weather_desc: "Mainly clear".into(),
        };

        let entry: ForecastEntry = row.into();
        assert_eq!(entry.time, "2026-08-26T14:00");
        assert_eq!(entry.temperature, Some(21.0));
        assert_eq!(entry.snow_mm, None);
    }

    #[test]
    fn ddl_declares_unique_key() {
        assert!(CREATE_FORECASTS_TABLE.contains("UNIQUE(location, time)"));
    }
}
