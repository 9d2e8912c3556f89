//! Integration tests for the forecast store contract

use skycast_core::ForecastEntry;
use skycast_db::{Store, StoreError};
use tempfile::TempDir;

async fn open_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("skycast.db")).await.unwrap();
    (dir, store)
}

fn entry(time: &str, temp: f64) -> ForecastEntry {
    ForecastEntry {
        time: time.to_string(),
        temperature: Some(temp),
        feels_like: Some(temp - 1.5),
        rain_mm: Some(0.0),
        snow_mm: Some(0.0),
        precip_prob: Some(20.0),
        weather_desc: "Partly cloudy".to_string(),
    }
}

#[tokio::test]
async fn upsert_then_read_returns_batch() {
    let (_dir, store) = open_store().await;

    let batch = vec![
        entry("2026-08-26T13:00", 20.0),
        entry("2026-08-26T14:00", 21.0),
        entry("2026-08-26T15:00", 22.0),
    ];
    store.upsert_forecast("Berlin", &batch).await.unwrap();

    let read = store.read_forecast("Berlin").await.unwrap();
    assert_eq!(read.len(), 3);
    assert_eq!(read[0].time, "2026-08-26T13:00");
    assert_eq!(read[1].temperature, Some(21.0));
}

#[tokio::test]
async fn upsert_is_idempotent() {
    let (_dir, store) = open_store().await;

    let batch = vec![
        entry("2026-08-26T13:00", 20.0),
        entry("2026-08-26T14:00", 21.0),
    ];
    store.upsert_forecast("Berlin", &batch).await.unwrap();
    let once = store.read_forecast("Berlin").await.unwrap();

    store.upsert_forecast("Berlin", &batch).await.unwrap();
    let twice = store.read_forecast("Berlin").await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(store.count_forecast("Berlin").await.unwrap(), 2);
}

#[tokio::test]
async fn no_two_rows_share_a_time() {
    let (_dir, store) = open_store().await;

    for temp in [18.0, 19.0, 20.0] {
        store
            .upsert_forecast("Berlin", &[entry("2026-08-26T13:00", temp)])
            .await
            .unwrap();
    }

    assert_eq!(store.count_forecast("Berlin").await.unwrap(), 1);
}

#[tokio::test]
async fn upsert_overwrites_only_the_matching_row() {
    let (_dir, store) = open_store().await;

    store
        .upsert_forecast(
            "Berlin",
            &[
                entry("2026-08-26T13:00", 20.0),
                entry("2026-08-26T14:00", 21.0),
            ],
        )
        .await
        .unwrap();

    let mut replacement = entry("2026-08-26T14:00", 30.0);
    replacement.weather_desc = "Thunderstorm".to_string();
    store
        .upsert_forecast("Berlin", &[replacement])
        .await
        .unwrap();

    let read = store.read_forecast("Berlin").await.unwrap();
    assert_eq!(read.len(), 2);
    assert_eq!(read[0].temperature, Some(20.0));
    assert_eq!(read[0].weather_desc, "Partly cloudy");
    assert_eq!(read[1].temperature, Some(30.0));
    assert_eq!(read[1].weather_desc, "Thunderstorm");
}

#[tokio::test]
async fn read_is_sorted_regardless_of_insert_order() {
    let (_dir, store) = open_store().await;

    let shuffled = vec![
        entry("2026-08-26T19:00", 18.0),
        entry("2026-08-26T07:00", 14.0),
        entry("2026-08-26T23:00", 16.0),
        entry("2026-08-26T12:00", 20.0),
        entry("2026-08-26T03:00", 12.0),
    ];
    store.upsert_forecast("Berlin", &shuffled).await.unwrap();

    let read = store.read_forecast("Berlin").await.unwrap();
    let times: Vec<&str> = read.iter().map(|e| e.time.as_str()).collect();
    assert_eq!(
        times,
        vec![
            "2026-08-26T03:00",
            "2026-08-26T07:00",
            "2026-08-26T12:00",
            "2026-08-26T19:00",
            "2026-08-26T23:00",
        ]
    );
}

#[tokio::test]
async fn locations_are_isolated() {
    let (_dir, store) = open_store().await;

    store
        .upsert_forecast("Berlin", &[entry("2026-08-26T13:00", 20.0)])
        .await
        .unwrap();
    store
        .upsert_forecast("Hamburg", &[entry("2026-08-26T13:00", 17.0)])
        .await
        .unwrap();

    let berlin = store.read_forecast("Berlin").await.unwrap();
    let hamburg = store.read_forecast("Hamburg").await.unwrap();
    assert_eq!(berlin[0].temperature, Some(20.0));
    assert_eq!(hamburg[0].temperature, Some(17.0));

    // Location is an exact-match partition key, not normalized
    assert!(store.read_forecast("berlin").await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_location_is_rejected_before_storage() {
    let (_dir, store) = open_store().await;

    let err = store
        .upsert_forecast("   ", &[entry("2026-08-26T13:00", 20.0)])
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidLocation));

    let err = store.read_forecast("").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidLocation));
}

#[tokio::test]
async fn empty_batch_is_rejected() {
    let (_dir, store) = open_store().await;

    let err = store.upsert_forecast("Berlin", &[]).await.unwrap_err();
    assert!(matches!(err, StoreError::EmptyBatch));
}

#[tokio::test]
async fn reading_unknown_location_returns_empty_vec() {
    let (_dir, store) = open_store().await;

    let read = store.read_forecast("Atlantis").await.unwrap();
    assert!(read.is_empty());
}

#[tokio::test]
async fn nullable_fields_round_trip() {
    let (_dir, store) = open_store().await;

    let sparse = ForecastEntry {
        time: "2026-08-26T13:00".to_string(),
        temperature: None,
        feels_like: None,
        rain_mm: None,
        snow_mm: None,
        precip_prob: None,
        weather_desc: "Unknown".to_string(),
    };
    store.upsert_forecast("Berlin", &[sparse]).await.unwrap();

    let read = store.read_forecast("Berlin").await.unwrap();
    assert_eq!(read[0].temperature, None);
    assert_eq!(read[0].precip_prob, None);
    assert_eq!(read[0].weather_desc, "Unknown");
}
