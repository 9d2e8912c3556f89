//! Query operations for the forecast table

use crate::schema::ForecastRow;
use crate::{Store, StoreError, StoreResult};
use skycast_core::ForecastEntry;
use sqlx::Row;
use tracing::{debug, instrument};

impl Store {
    /// Insert or overwrite a batch of forecast entries for one location
    ///
    /// The whole batch runs inside a single transaction: either every entry
    /// is applied or none is. Rows that share (location, time) with an
    /// existing row have their measurement fields overwritten.
    #[instrument(skip(self, entries))]
    pub async fn upsert_forecast(
        &self,
        location: &str,
        entries: &[ForecastEntry],
    ) -> StoreResult<()> {
        if location.trim().is_empty() {
            return Err(StoreError::InvalidLocation);
        }
        if entries.is_empty() {
            return Err(StoreError::EmptyBatch);
        }

        let mut tx = self.pool().begin().await?;

        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO forecasts
                (location, time, temperature, feels_like, rain_mm, snow_mm, precip_prob, weather_desc)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(location, time) DO UPDATE SET
                    temperature = excluded.temperature,
                    feels_like = excluded.feels_like,
                    rain_mm = excluded.rain_mm,
                    snow_mm = excluded.snow_mm,
                    precip_prob = excluded.precip_prob,
                    weather_desc = excluded.weather_desc
                "#,
            )
            .bind(location)
            .bind(&entry.time)
            .bind(entry.temperature)
            .bind(entry.feels_like)
            .bind(entry.rain_mm)
            .bind(entry.snow_mm)
            .bind(entry.precip_prob)
            .bind(&entry.weather_desc)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(
            "Upserted {} forecast entries for location {:?}",
            entries.len(),
            location
        );
        Ok(())
    }

    /// Get all stored entries for a location, ascending by time
    #[instrument(skip(self))]
    pub async fn read_forecast(&self, location: &str) -> StoreResult<Vec<ForecastEntry>> {
        if location.trim().is_empty() {
            return Err(StoreError::InvalidLocation);
        }

        let rows = sqlx::query_as::<_, ForecastRow>(
            r#"
            SELECT location, time, temperature, feels_like, rain_mm, snow_mm, precip_prob, weather_desc
            FROM forecasts
            WHERE location = ?
            ORDER BY time ASC
            "#,
        )
        .bind(location)
        .fetch_all(self.pool())
        .await?;

        debug!(
            "Retrieved {} forecast entries for location {:?}",
            rows.len(),
            location
        );
        Ok(rows.into_iter().map(ForecastEntry::from).collect())
    }

    /// Count stored rows for a location
    #[instrument(skip(self))]
    pub async fn count_forecast(&self, location: &str) -> StoreResult<i64> {
        if location.trim().is_empty() {
            return Err(StoreError::InvalidLocation);
        }

        let row = sqlx::query("SELECT COUNT(*) as count FROM forecasts WHERE location = ?")
            .bind(location)
            .fetch_one(self.pool())
            .await?;

        Ok(row.get("count"))
    }
}
