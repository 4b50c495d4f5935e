//! Dimension rows: the country → city hierarchy samples are keyed by.
//!
//! Ownership runs one way only. A city references its country by id and a
//! sample references its city by id; "a country's cities" is a query.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A country, identified by its exact (case-sensitive) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  pub country_id: Uuid,
  pub name:       String,
}

/// A city, identified by `(name, country_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
  pub city_id:    Uuid,
  pub name:       String,
  pub country_id: Uuid,
}

/// The durable ids a `(city, country)` name pair resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
  pub city_id:    Uuid,
  pub country_id: Uuid,
}
