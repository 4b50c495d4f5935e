//! The `WeatherStore` trait.
//!
//! Implemented by storage backends (e.g. `meteolog-store-sqlite`). The
//! scheduler and the API depend on this abstraction, not on a concrete
//! backend.

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
  location::{City, Country, ResolvedLocation},
  sample::{Conditions, Sample, WeatherRecord},
};

/// Abstraction over a meteolog storage backend.
///
/// Dimension rows are created lazily and live forever; samples are strictly
/// append-only.
pub trait WeatherStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Dimensions ────────────────────────────────────────────────────────

  /// Resolve `(city, country)` to durable ids, creating the country and/or
  /// city row on first sighting. Repeated calls with the same names return
  /// the same ids and create nothing.
  fn resolve_location<'a>(
    &'a self,
    city: &'a str,
    country: &'a str,
  ) -> impl Future<Output = Result<ResolvedLocation, Self::Error>> + Send + 'a;

  /// All known countries, in creation order.
  fn list_countries(
    &self,
  ) -> impl Future<Output = Result<Vec<Country>, Self::Error>> + Send + '_;

  /// All known cities, in creation order.
  fn list_cities(
    &self,
  ) -> impl Future<Output = Result<Vec<City>, Self::Error>> + Send + '_;

  // ── Samples — append-only writes ──────────────────────────────────────

  /// Append one sample for `city_id`. `observed_at` is set by the store to
  /// the current time; every call inserts a new row.
  fn append_sample(
    &self,
    city_id: Uuid,
    conditions: Conditions,
  ) -> impl Future<Output = Result<Sample, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every stored sample joined to its city and country names. This is the
  /// full history, not the latest sample per city.
  fn snapshot(
    &self,
  ) -> impl Future<Output = Result<Vec<WeatherRecord>, Self::Error>> + Send + '_;

  /// Samples whose city name equals `city` exactly and whose `observed_at`
  /// is at or after `since`, oldest first.
  fn trend<'a>(
    &'a self,
    city: &'a str,
    since: DateTime<Utc>,
  ) -> impl Future<Output = Result<Vec<WeatherRecord>, Self::Error>> + Send + 'a;
}
