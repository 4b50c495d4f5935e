//! Samples — immutable point-in-time observations for a city.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Normalised current conditions, as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
  /// Degrees Celsius.
  pub temperature: f64,
  /// Kilometres per hour.
  pub wind_speed:  f64,
  /// Cloud cover, 0–100.
  pub cloud_cover: i32,
}

/// A stored observation. Never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
  pub sample_id:   Uuid,
  pub city_id:     Uuid,
  pub conditions:  Conditions,
  /// Capture time, assigned by the store at write time.
  pub observed_at: DateTime<Utc>,
}

/// A sample joined to its dimension names — the read model served by the
/// snapshot and trend queries. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
  pub city:        String,
  pub country:     String,
  pub temperature: f64,
  pub wind_speed:  f64,
  pub clouds:      i32,
  pub last_update: DateTime<Utc>,
}
