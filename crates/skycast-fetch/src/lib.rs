//! Upstream weather data clients
//!
//! Two collaborators: a geocoder that resolves a free-text place name to
//! coordinates, and a forecast provider that resolves coordinates to 24
//! hourly samples. Both sit behind traits so the server can be tested with
//! fakes instead of live services. No retry policy: a failed fetch is
//! terminal for the triggering user action.

pub mod forecast;
pub mod geocode;

pub use forecast::*;
pub use geocode::*;

use skycast_core::{Coordinates, ForecastEntry};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No results found for {0}")]
    NoMatch(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Resolves a free-text place name to coordinates
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    async fn lookup(&self, place: &str) -> FetchResult<Coordinates>;
}

/// Resolves coordinates to an hourly forecast
#[async_trait::async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn hourly(&self, coords: Coordinates) -> FetchResult<Vec<ForecastEntry>>;
}
