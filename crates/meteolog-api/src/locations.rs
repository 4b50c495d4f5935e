//! Read-only listings of the dimension rows.

use std::sync::Arc;

use axum::{Json, extract::State};
use meteolog_core::{
  location::{City, Country},
  store::WeatherStore,
};

use crate::error::ApiError;

/// `GET /countries`
pub async fn countries<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Country>>, ApiError>
where
  S: WeatherStore,
{
  let countries = store.list_countries().await.map_err(ApiError::store)?;
  Ok(Json(countries))
}

/// `GET /cities`
pub async fn cities<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<City>>, ApiError>
where
  S: WeatherStore,
{
  let cities = store.list_cities().await.map_err(ApiError::store)?;
  Ok(Json(cities))
}
