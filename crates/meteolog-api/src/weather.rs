//! Handlers for the weather read endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/weather-data` | Every stored sample, full history |
//! | `GET`  | `/weather-trend` | `?city` required; optional `hours` (default 2) |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use meteolog_core::{
  sample::WeatherRecord,
  store::WeatherStore,
  trend::{DEFAULT_TREND_HOURS, TrendWindow, trend_for},
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── Snapshot ─────────────────────────────────────────────────────────────────

/// `GET /weather-data`
pub async fn snapshot<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<WeatherRecord>>, ApiError>
where
  S: WeatherStore,
{
  let records = store.snapshot().await.map_err(ApiError::store)?;
  Ok(Json(records))
}

// ─── Trend ────────────────────────────────────────────────────────────────────

fn default_hours() -> i64 { DEFAULT_TREND_HOURS }

#[derive(Debug, Deserialize)]
pub struct TrendParams {
  /// Exact city name; not disambiguated by country.
  pub city:  String,
  /// Window length, counted back from now. Negative windows are empty.
  #[serde(default = "default_hours")]
  pub hours: i64,
}

/// `GET /weather-trend?city=<name>[&hours=<n>]`
pub async fn trend<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<TrendParams>,
) -> Result<Json<Vec<WeatherRecord>>, ApiError>
where
  S: WeatherStore,
{
  if params.city.trim().is_empty() {
    return Err(ApiError::BadRequest("city must not be empty".into()));
  }

  let records = trend_for(store.as_ref(), &params.city, TrendWindow::hours(params.hours))
    .await
    .map_err(ApiError::store)?;
  Ok(Json(records))
}
