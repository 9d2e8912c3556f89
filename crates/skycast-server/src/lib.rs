//! HTTP surface for the skycast dashboard
//!
//! Two reference endpoints (/api/fetch, /api/data), the computed dashboard
//! view (/api/view), a health probe, and a static-file fallback for the
//! frontend. Every response carries an allow-all CORS header.

pub mod config;
pub mod static_files;

use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderValue, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use skycast_dashboard::DashboardView;
use skycast_db::Store;
use skycast_fetch::{ForecastProvider, Geocoder};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

pub struct AppState {
    pub store: Store,
    pub geocoder: Arc<dyn Geocoder>,
    pub provider: Arc<dyn ForecastProvider>,
    pub web_root: PathBuf,
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/fetch", get(api_fetch))
        .route("/api/data", get(api_data))
        .route("/api/view", get(api_view))
        .route("/api/*rest", get(api_unknown))
        .fallback(static_fallback)
        .layer(middleware::from_fn(allow_all_origin))
        .with_state(state)
}

/// Append the open cross-origin header to every response
async fn allow_all_origin(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

fn location_param(query: &HashMap<String, String>) -> Option<String> {
    query
        .get("location")
        .filter(|l| !l.trim().is_empty())
        .cloned()
}

fn missing_location() -> Response {
    (StatusCode::BAD_REQUEST, "Missing location parameter").into_response()
}

/// Geocode, fetch the hourly forecast, and upsert it into the store,
/// strictly in that order
async fn api_fetch(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let Some(location) = location_param(&query) else {
        return missing_location();
    };

    let coords = match state.geocoder.lookup(&location).await {
        Ok(coords) => coords,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Location fetch failed: {e}"),
            )
                .into_response();
        }
    };

    let entries = match state.provider.hourly(coords).await {
        Ok(entries) => entries,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Forecast fetch failed: {e}"),
            )
                .into_response();
        }
    };

    if let Err(e) = state.store.upsert_forecast(&location, &entries).await {
        error!("upsert_forecast error: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to update forecast data: {e}"),
        )
            .into_response();
    }

    (StatusCode::OK, "Forecast updated successfully").into_response()
}

/// Stored entries for a location, ascending by time (empty array if none)
async fn api_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let Some(location) = location_param(&query) else {
        return missing_location();
    };

    match state.store.read_forecast(&location).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => {
            error!("read_forecast error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch forecast data",
            )
                .into_response()
        }
    }
}

/// Computed dashboard view model for a location (`null` when no data)
async fn api_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let Some(location) = location_param(&query) else {
        return missing_location();
    };

    match state.store.read_forecast(&location).await {
        Ok(entries) => {
            let now = chrono::Local::now().naive_local();
            let view = DashboardView::build(&entries, now);
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(e) => {
            error!("read_forecast error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch forecast data",
            )
                .into_response()
        }
    }
}

async fn api_unknown() -> Response {
    (StatusCode::NOT_FOUND, "Unknown API endpoint").into_response()
}

async fn static_fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    static_files::serve(&state.web_root, &uri).await
}
