//! Store handle and connection management

use crate::schema::CREATE_FORECASTS_TABLE;
use crate::StoreResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

/// Forecast store wrapping an sqlx SQLite pool
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (or create) the database file and ensure the schema exists
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    /// Create the forecasts table if it does not exist
    pub async fn init(&self) -> StoreResult<()> {
        sqlx::query(CREATE_FORECASTS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Get reference to underlying pool for direct queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Test the database connection
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the connection pool gracefully
    pub async fn close(self) {
        self.pool.close().await;
    }
}
