//! Forecast storage layer backed by SQLite
//!
//! One table of hourly forecast rows keyed by (location, time). The unique
//! key makes refreshes idempotent: re-fetching a location overwrites rows
//! that share a timestamp and inserts the rest.

pub mod client;
pub mod queries;
pub mod schema;

pub use client::*;
pub use schema::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid location: empty or whitespace-only")]
    InvalidLocation,

    #[error("Forecast batch is empty")]
    EmptyBatch,

    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
