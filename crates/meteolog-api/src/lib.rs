//! JSON read API for meteolog.
//!
//! Exposes an axum [`Router`] backed by any [`WeatherStore`]. The API is
//! read-only; all writes come from the ingestion scheduler.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api/weather", meteolog_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod locations;
pub mod weather;

use std::sync::Arc;

use axum::{Router, routing::get};
use meteolog_core::store::WeatherStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: WeatherStore + 'static,
{
  Router::new()
    // Samples
    .route("/weather-data", get(weather::snapshot::<S>))
    .route("/weather-trend", get(weather::trend::<S>))
    // Dimensions
    .route("/countries", get(locations::countries::<S>))
    .route("/cities", get(locations::cities::<S>))
    .with_state(store)
}

// ─── Router tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use meteolog_core::{
    location::{City, Country},
    sample::{Conditions, WeatherRecord},
  };
  use meteolog_store_sqlite::SqliteStore;
  use serde::de::DeserializeOwned;
  use tower::ServiceExt as _;

  async fn make_store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().await.unwrap())
  }

  async fn record(store: &SqliteStore, city: &str, country: &str, temperature: f64) {
    let loc = store.resolve_location(city, country).await.unwrap();
    store
      .append_sample(loc.city_id, Conditions {
        temperature,
        wind_speed: 10.0,
        cloud_cover: 40,
      })
      .await
      .unwrap();
  }

  async fn get_raw(store: Arc<SqliteStore>, uri: &str) -> axum::response::Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    api_router(store).oneshot(req).await.unwrap()
  }

  async fn get_json<T: DeserializeOwned>(store: Arc<SqliteStore>, uri: &str) -> T {
    let resp = get_raw(store, uri).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
  }

  // ── Snapshot ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn weather_data_returns_every_sample() {
    let store = make_store().await;
    record(&store, "Paris", "France", 15.5).await;
    record(&store, "Paris", "France", 16.0).await;
    record(&store, "Berlin", "Germany", 10.5).await;

    let records: Vec<WeatherRecord> = get_json(store, "/weather-data").await;
    assert_eq!(records.len(), 3);
    assert!(records.iter().any(|r| r.city == "Berlin" && r.country == "Germany"));
  }

  #[tokio::test]
  async fn weather_data_uses_camel_case_fields() {
    let store = make_store().await;
    record(&store, "Paris", "France", 15.5).await;

    let raw: serde_json::Value = get_json(store, "/weather-data").await;
    let first = &raw[0];
    assert_eq!(first["city"], "Paris");
    assert_eq!(first["windSpeed"], 10.0);
    assert_eq!(first["clouds"], 40);
    assert!(first["lastUpdate"].is_string());
  }

  // ── Trend ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn weather_trend_filters_by_city() {
    let store = make_store().await;
    record(&store, "Paris", "France", 15.5).await;
    record(&store, "Berlin", "Germany", 10.5).await;
    record(&store, "Paris", "France", 16.5).await;

    let records: Vec<WeatherRecord> =
      get_json(store, "/weather-trend?city=Paris&hours=3").await;
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.city == "Paris"));
    assert_eq!(records[0].temperature, 15.5);
    assert_eq!(records[1].temperature, 16.5);
  }

  #[tokio::test]
  async fn weather_trend_defaults_to_two_hours() {
    let store = make_store().await;
    record(&store, "Paris", "France", 15.5).await;

    let records: Vec<WeatherRecord> = get_json(store, "/weather-trend?city=Paris").await;
    assert_eq!(records.len(), 1);
  }

  #[tokio::test]
  async fn weather_trend_for_unknown_city_is_empty_200() {
    let store = make_store().await;
    let records: Vec<WeatherRecord> =
      get_json(store, "/weather-trend?city=Atlantis").await;
    assert!(records.is_empty());
  }

  #[tokio::test]
  async fn weather_trend_rejects_bad_parameters() {
    let store = make_store().await;

    let missing = get_raw(store.clone(), "/weather-trend").await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let empty = get_raw(store.clone(), "/weather-trend?city=").await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

    let not_a_number = get_raw(store, "/weather-trend?city=Paris&hours=two").await;
    assert_eq!(not_a_number.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn weather_trend_with_negative_hours_is_empty_200() {
    let store = make_store().await;
    record(&store, "Paris", "France", 15.5).await;

    let records: Vec<WeatherRecord> =
      get_json(store, "/weather-trend?city=Paris&hours=-1").await;
    assert!(records.is_empty());
  }

  #[tokio::test]
  async fn weather_trend_with_huge_hours_covers_everything() {
    let store = make_store().await;
    record(&store, "Paris", "France", 15.5).await;
    record(&store, "Paris", "France", 16.5).await;

    let records: Vec<WeatherRecord> =
      get_json(store.clone(), "/weather-trend?city=Paris&hours=3000000000").await;
    assert_eq!(records.len(), 2);

    let records: Vec<WeatherRecord> = get_json(
      store,
      "/weather-trend?city=Paris&hours=9223372036854775807",
    )
    .await;
    assert_eq!(records.len(), 2);
  }

  // ── Dimensions ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn dimension_listings_are_deduplicated() {
    let store = make_store().await;
    record(&store, "Paris", "France", 15.5).await;
    record(&store, "Paris", "France", 16.0).await;
    record(&store, "Lyon", "France", 17.0).await;

    let countries: Vec<Country> = get_json(store.clone(), "/countries").await;
    assert_eq!(countries.len(), 1);

    let cities: Vec<City> = get_json(store, "/cities").await;
    assert_eq!(cities.len(), 2);
    assert!(cities.iter().all(|c| c.country_id == countries[0].country_id));
  }
}
